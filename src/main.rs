use anyhow::Context;
use clap::{Parser, Subcommand};
use plugrun::monitoring::{init_logging, LogFormat, LogLevel, LoggerConfig};
use plugrun::plugin::builtin::{ADD_NUMBERS, HELLO_WORLD, REVERSE_STRING};
use plugrun::plugin::{render_output, PluginArgs, PluginRegistry};
use plugrun::plugin_args;

#[derive(Parser)]
#[command(name = "plugrun")]
#[command(about = "Run named plugins from a registry", long_about = None, version)]
struct Cli {
    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    /// Log level when RUST_LOG is unset
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register the sample plugins and run each once
    Demo,
    /// List available plugins
    List,
    /// Run a plugin by name
    Run {
        /// Plugin name
        name: String,
        /// Arguments; JSON values, anything else is a string
        args: Vec<String>,
    },
}

/// Format names as a bracketed, single-quoted list: `['a', 'b']`.
fn format_names(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    format!("[{}]", quoted.join(", "))
}

fn demo(registry: &PluginRegistry) -> anyhow::Result<()> {
    println!("Available plugins: {}", format_names(&registry.list()));

    let calls = [
        (HELLO_WORLD, plugin_args![]),
        (ADD_NUMBERS, plugin_args![5, 7]),
        (REVERSE_STRING, plugin_args!["Python"]),
    ];
    for (name, args) in &calls {
        let output = registry.run(name, args)?;
        println!("{}", render_output(&output));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(
        &LoggerConfig::default()
            .with_level(cli.log_level)
            .with_format(cli.log_format),
    )?;

    let registry = PluginRegistry::with_builtins()?;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => demo(&registry)?,
        Commands::List => {
            for (name, info) in registry.describe() {
                println!("{:<16} {:<10} {}", name, info.usage, info.description);
            }
        }
        Commands::Run { name, args } => {
            let args = PluginArgs::from_cli(&args);
            let output = registry
                .run(&name, &args)
                .with_context(|| format!("plugin '{}' failed", name))?;
            println!("{}", render_output(&output));
        }
    }

    Ok(())
}
