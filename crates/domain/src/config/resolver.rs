use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub source: ResolverSource,
}

/// Where the lookup adapter takes its name servers from.
///
/// `System` reads the host configuration (`/etc/resolv.conf` on Unix); the
/// others point at a well-known public resolver.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolverSource {
    #[default]
    System,

    Google,

    Cloudflare,

    Quad9,
}

impl ResolverSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Google => "google",
            Self::Cloudflare => "cloudflare",
            Self::Quad9 => "quad9",
        }
    }
}
