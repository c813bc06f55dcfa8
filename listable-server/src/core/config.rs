/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖（启动时先加载 `.env`）：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT | 5000 | HTTP 服务端口 |
/// | DATABASE_URL | ws://127.0.0.1:8000 | SurrealDB 地址 |
/// | DB_USER | - | 数据库用户名 |
/// | DB_PASS | - | 数据库密码 |
/// | DB_NAMESPACE | listable | SurrealDB namespace |
/// | DB_DATABASE | listable | SurrealDB database |
/// | LOG_LEVEL | info | 默认日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志文件目录 (按天滚动) |
/// | LOG_FORMAT | text | text 或 json |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// PORT=8080 DB_USER=root DB_PASS=secret cargo run -p listable-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 服务端口
    pub http_port: u16,
    /// 文档数据库配置
    pub database: DatabaseConfig,
    /// 默认日志级别
    pub log_level: String,
    /// 日志目录 (None = 仅输出到 stdout)
    pub log_dir: Option<String>,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 运行环境: development | staging | production
    pub environment: String,
}

/// 文档数据库连接配置
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Endpoint: ws://, wss://, http(s):// or mem://
    pub url: String,
    pub namespace: String,
    pub database: String,
    /// Root credentials, used only when both DB_USER and DB_PASS are set
    pub credentials: Option<Credentials>,
}

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url)
            .field("namespace", &self.namespace)
            .field("database", &self.database)
            .field(
                "credentials",
                &self.credentials.as_ref().map(|c| c.username.as_str()),
            )
            .finish()
    }
}

impl DatabaseConfig {
    /// In-memory store, used by tests and local experiments
    pub fn in_memory() -> Self {
        Self {
            url: "mem://".into(),
            namespace: "listable".into(),
            database: "listable".into(),
            credentials: None,
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub(crate) fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).filter(|v| !v.is_empty());

        let credentials = match (non_empty("DB_USER"), non_empty("DB_PASS")) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            _ => None,
        };

        Self {
            http_port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            database: DatabaseConfig {
                url: non_empty("DATABASE_URL").unwrap_or_else(|| "ws://127.0.0.1:8000".into()),
                namespace: non_empty("DB_NAMESPACE").unwrap_or_else(|| "listable".into()),
                database: non_empty("DB_DATABASE").unwrap_or_else(|| "listable".into()),
                credentials,
            },
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty("LOG_DIR"),
            log_json: var("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
