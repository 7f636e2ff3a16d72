pub mod frontmatter;
pub mod metadata;
pub mod vault;
