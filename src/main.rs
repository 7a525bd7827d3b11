fn main() -> anyhow::Result<()> {
    blockwalk::app::run()
}
