fn main() -> anyhow::Result<()> {
    tmx2levels::run()
}
