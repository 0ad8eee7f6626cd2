use std::path::PathBuf;

use catalog::remote::RemoteStore;
use clap::Parser;
use process::models::TableSpec;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Tables to pull, `name` or `name=Title`, in listing order
    #[arg(required = true)]
    tables: Vec<TableSpec>,

    #[arg(long, env = "CATALOG_STORE_URL", default_value = "http://localhost:54321")]
    store_url: String,

    #[arg(long, env = "CATALOG_STORE_KEY", hide_env_values = true)]
    store_key: String,

    #[arg(long, default_value = catalog::SNAPSHOT_PATH)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let store = RemoteStore::new(&args.store_url, &args.store_key);

    process::load_catalog(&store, &args.tables, &args.output).await
}
