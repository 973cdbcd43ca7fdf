use url::Url;

/// Same-origin boundary for link discovery: the seed's host and port
#[derive(Debug, Clone)]
pub struct Scope {
    host: String,
    port: Option<u16>,
}

impl Scope {
    pub fn new(target: &str) -> anyhow::Result<Self> {
        let url = Url::parse(target)?;
        let host = url
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid target host"))?;

        Ok(Self {
            host: host.to_string(),
            port: url.port(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn is_in_scope(&self, url: &Url) -> bool {
        match url.host_str() {
            Some(host) => host == self.host && url.port() == self.port,
            None => false,
        }
    }
}
