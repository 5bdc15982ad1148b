use cucumber::{cli, World};
use cucumber_tests::features::AccessWorld;

#[tokio::main]
async fn main() {
    AccessWorld::cucumber()
        .with_cli::<()>(cli::Opts::parsed())
        .run_and_exit("features/")
        .await;
}
