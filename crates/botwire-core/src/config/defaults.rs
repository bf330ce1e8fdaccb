pub(super) fn default_api_host() -> String {
    "api.telegram.org".to_string()
}
pub(super) fn default_request_timeout() -> u64 {
    60
}
pub(super) fn default_log_level() -> String {
    "info".to_string()
}
pub(super) fn default_poll_timeout() -> u64 {
    30
}
pub(super) fn default_delete_webhook_attempts() -> u32 {
    5
}
pub(super) fn default_webhook_host() -> String {
    "0.0.0.0".to_string()
}
pub(super) fn default_webhook_port() -> u16 {
    8443
}
pub(super) fn default_webhook_path() -> String {
    "/webhook".to_string()
}
