pub const SYSTEM_PATH: &str = "/system/functions";
pub const FUNCTION_PATH: &str = "/system/function";
pub const NAMESPACES_PATH: &str = "/system/namespaces";
pub const NAMESPACE_KEY: &str = "namespace";
pub const SCALE_PATH: &str = "/system/scale-function";
pub const INFO_ENDPOINT: &str = "/system/info";
pub const QUERY_PATH: &str = "/api/v1/query";

pub(crate) const UNAUTHORIZED_MSG: &str =
    "unauthorized access, check the basic-auth secrets mounted for the gateway";

/// path of a single function under `base`, e.g. `/system/function/figlet`
pub fn function_path(base: &str, function_name: &str) -> String {
    base.trim_end_matches('/').to_string() + "/" + function_name.trim_start_matches('/')
}
