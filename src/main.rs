fn main() -> anyhow::Result<()> {
    candlesticks::cli::run::entry()
}
