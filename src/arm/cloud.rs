use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Cloud {
    #[default]
    Public,
    China,
    UsGov,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloudEndpoints {
    pub authority_host: String,
    pub resource_manager: String,
}

impl CloudEndpoints {
    pub fn new(authority_host: impl Into<String>, resource_manager: impl Into<String>) -> Self {
        Self {
            authority_host: trim_slash(authority_host.into()),
            resource_manager: trim_slash(resource_manager.into()),
        }
    }

    /// OAuth2 scope granting access to the management plane.
    pub fn scope(&self) -> String {
        format!("{}/.default", self.resource_manager)
    }
}

impl From<Cloud> for CloudEndpoints {
    fn from(cloud: Cloud) -> Self {
        match cloud {
            Cloud::Public => Self::new(
                "https://login.microsoftonline.com",
                "https://management.azure.com",
            ),
            Cloud::China => Self::new(
                "https://login.chinacloudapi.cn",
                "https://management.chinacloudapi.cn",
            ),
            Cloud::UsGov => Self::new(
                "https://login.microsoftonline.us",
                "https://management.usgovcloudapi.net",
            ),
        }
    }
}

fn trim_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_cloud_scope() {
        let endpoints = CloudEndpoints::from(Cloud::Public);
        assert_eq!(endpoints.scope(), "https://management.azure.com/.default");
    }

    #[test]
    fn trailing_slashes_are_dropped() {
        let endpoints = CloudEndpoints::new("http://127.0.0.1:9000/", "http://127.0.0.1:9001//");
        assert_eq!(endpoints.authority_host, "http://127.0.0.1:9000");
        assert_eq!(endpoints.scope(), "http://127.0.0.1:9001/.default");
    }
}
