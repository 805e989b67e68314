use anyhow::Result;
use http::header::AUTHORIZATION;
use macsign::bracket::{DefaultCredentialProvider, RequestSigner, StaticCredentialProvider};
use macsign::{default_context, Signer};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Env vars and the credentials file win; the static pair is a fallback.
    let provider = DefaultCredentialProvider::new();
    let provider = macsign::ProvideCredentialChain::new()
        .push(provider)
        .push(StaticCredentialProvider::new("demo-uuid", "demo-apikey"));

    let signer = Signer::new(default_context(), provider, RequestSigner::new());

    let req = http::Request::post("https://portal.brkt.com/v1/api/v1/workload")
        .header("content-type", "application/json")
        .body(r#"{"name":"web"}"#.to_string())?;
    let signed = signer.signed(&req).await?;

    println!("{}", signed.headers()[AUTHORIZATION].to_str()?);
    Ok(())
}
