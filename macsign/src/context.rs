use macsign_core::{Context, OsEnv};
use macsign_file_read_tokio::TokioFileRead;

/// Create a [`Context`] backed by tokio file reads and the process environment.
///
/// The clock and nonce generator keep their defaults: system time and
/// 12 random bytes from the OS per request.
pub fn default_context() -> Context {
    Context::new().with_file_read(TokioFileRead).with_env(OsEnv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_context_reads_files() {
        let ctx = default_context();
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let content = ctx.file_read_as_string(path).await.unwrap();
        assert!(content.contains("name = \"macsign\""));
    }
}
