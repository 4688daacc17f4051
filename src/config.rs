use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Config file picked up from the working directory when no explicit path is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Directory holding `images/` and `static/`
    #[arg(long, env = "ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Inject the customer-chat widget script
    #[arg(long, env = "CHAT_WIDGET_ENABLED")]
    pub chat_widget_enabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub chat_widget: ChatWidgetConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// `host:port` string handed to the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.assets_dir.join("images")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.assets_dir.join("static")
    }
}

/// Document-level metadata.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub lang: String,
    pub default_title: String,
    /// Title template; `%s` is replaced by the page title.
    pub title_template: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl SiteConfig {
    /// Resolve the `<title>` for a page. `None` yields the default title.
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) if !page.trim().is_empty() => self.title_template.replace("%s", page),
            _ => self.default_title.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatWidgetConfig {
    pub enabled: bool,
    pub base_url: String,
    pub website_token: String,
}

impl ChatWidgetConfig {
    /// The loader is only emitted when enabled and a token is configured.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.website_token.trim().is_empty() && !self.base_url.trim().is_empty()
    }

    /// URL of the widget SDK script.
    pub fn sdk_url(&self) -> String {
        format!("{}/packs/js/sdk.js", self.base_url.trim_end_matches('/'))
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.assets_dir", "public")?
            .set_default("site.lang", "es")?
            .set_default(
                "site.default_title",
                "CloudNext - Automatiza tu negocio en la nube",
            )?
            .set_default("site.title_template", "%s | CloudNext")?
            .set_default(
                "site.description",
                "En CloudNext, te ayudamos a optimizar tus procesos y a escalar tu negocio con soluciones cloud a la medida.",
            )?
            .set_default(
                "site.keywords",
                vec![
                    "CloudNext",
                    "Automatiza tu negocio",
                    "Soluciones cloud",
                    "Optimiza tus procesos",
                    "Escalabilidad",
                    "Negocio en la nube",
                ],
            )?
            .set_default("chat_widget.enabled", true)?
            .set_default("chat_widget.base_url", "https://app.chatwoot.com")?
            .set_default("chat_widget.website_token", "")?;

        // Config file: explicit path wins, otherwise ./config.yaml if it exists
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path).required(true));
        } else if Path::new(CWD_CONFIG_FILE).exists() {
            builder = builder.add_source(File::with_name(CWD_CONFIG_FILE).required(false));
        }

        // Prefixed environment, e.g. CLOUDNEXT_SERVER__PORT=8000. The prefix
        // separator must be set explicitly, otherwise it defaults to `__` too.
        builder = builder.add_source(
            Environment::with_prefix("CLOUDNEXT")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("site.keywords")
                .try_parsing(true),
        );

        // CLI flags (and their clap-level env vars) take priority over everything
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(dir) = cli.assets_dir {
            builder =
                builder.set_override("server.assets_dir", dir.to_string_lossy().into_owned())?;
        }
        if let Some(enabled) = cli.chat_widget_enabled {
            builder = builder.set_override("chat_widget.enabled", enabled)?;
        }

        let cfg = builder.build()?;
        Ok(cfg.try_deserialize()?)
    }
}
