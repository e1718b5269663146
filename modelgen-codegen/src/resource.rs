//! Static support modules copied verbatim into generated trees.

/// A file copied verbatim into the output root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// Module name declared by the root module.
    pub module: &'static str,
    /// File name relative to the output root.
    pub file_name: &'static str,
    /// File content.
    pub content: &'static str,
}

/// Marshal and assertion helpers used by JSON objects and unions.
pub const MARSHAL: Resource = Resource {
    module: "marshal",
    file_name: "marshal.rs",
    content: include_str!("../resource/marshal.rs"),
};

/// Column binding types used by entities.
pub const ORM: Resource = Resource {
    module: "orm",
    file_name: "orm.rs",
    content: include_str!("../resource/orm.rs"),
};

/// Connection configuration stub for the query-serving process.
pub const DB_CONFIG: Resource = Resource {
    module: "db_config",
    file_name: "db_config.rs",
    content: include_str!("../resource/db_config.rs"),
};
