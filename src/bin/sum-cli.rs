use clap::Parser;
use std::process::ExitCode;
use sum_sdk::SumClient;

#[derive(Parser)]
#[command(name = "sum-cli")]
#[command(about = "Add two numbers using a running sum-service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    /// First operand.
    a: String,

    /// Second operand.
    b: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = SumClient::new(&cli.url);

    match client.submit(&cli.a, &cli.b).await {
        Ok(sum) => {
            println!("{}", sum.resultado);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
