fn main() -> anyhow::Result<()> {
    dirsearch::cli::run()
}
