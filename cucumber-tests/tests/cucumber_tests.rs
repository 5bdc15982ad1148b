use cucumber::World;
use cucumber_tests::features::AccessWorld;

#[tokio::main]
async fn main() {
    AccessWorld::cucumber().fail_on_skipped().run_and_exit("features/").await;
}
