use clap::{Args, Parser, Subcommand, ValueEnum};
use flowtext::prelude::*;
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

// --- JSON Deserialization Structs (Input Format Specific) ---

#[derive(Deserialize)]
struct RawSlice {
    label: String,
    value: f64,
}

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionCli {
    Td,
    Tb,
    Bt,
    Lr,
    Rl,
}

impl From<DirectionCli> for Direction {
    fn from(value: DirectionCli) -> Self {
        match value {
            DirectionCli::Td => Direction::TopDown,
            DirectionCli::Tb => Direction::TopBottom,
            DirectionCli::Bt => Direction::BottomTop,
            DirectionCli::Lr => Direction::LeftRight,
            DirectionCli::Rl => Direction::RightLeft,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// The full chat message text
    Message,
    /// Only the Mermaid diagram text
    Diagram,
    /// The message serialized as JSON
    Json,
}

/// Turn step descriptions and data into Mermaid diagrams wrapped in chat messages
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// What to print on stdout
    #[arg(short, long, value_enum, global = true, default_value_t = OutputFormat::Message)]
    output: OutputFormat,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a flowchart from a JSON list of steps
    Flow {
        /// Path to the steps JSON file, or '-' for stdin
        steps_path: String,
        #[command(flatten)]
        options: FlowOptions,
    },
    /// Build a straight-line flowchart from plain step labels
    Linear {
        /// Step labels, in order
        #[arg(required = true)]
        labels: Vec<String>,
        #[command(flatten)]
        options: FlowOptions,
    },
    /// Build a pie chart from a JSON list of {"label", "value"} objects
    Pie {
        /// Path to the data JSON file, or '-' for stdin
        data_path: String,
        /// Chart title
        #[arg(short, long)]
        title: Option<String>,
    },
}

#[derive(Args, Debug)]
struct FlowOptions {
    /// Layout direction of the flowchart
    #[arg(short, long, value_enum, default_value_t = DirectionCli::Td)]
    direction: DirectionCli,

    /// Render edges to undefined steps instead of failing
    #[arg(long)]
    lenient: bool,

    /// Strip brackets and quotes from labels and shorten long ones
    #[arg(long)]
    sanitize: bool,
}

impl FlowOptions {
    fn builder(&self) -> FlowchartTextBuilder {
        let policy = if self.lenient {
            ReferencePolicy::PassThrough
        } else {
            ReferencePolicy::Strict
        };
        FlowchartTextBuilder::new()
            .with_direction(self.direction.into())
            .with_reference_policy(policy)
            .with_label_sanitizing(self.sanitize)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let message = match cli.command {
        Command::Flow {
            steps_path,
            options,
        } => run_flow(&steps_path, &options),
        Command::Linear { labels, options } => run_linear(labels, &options),
        Command::Pie { data_path, title } => run_pie(&data_path, title),
    };

    print_message(&message, cli.output);
}

fn run_flow(steps_path: &str, options: &FlowOptions) -> DiagramMessage {
    let steps_json = read_input(steps_path);
    let steps = parse_steps_json(&steps_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read steps: {}", e)));

    options
        .builder()
        .build(&steps)
        .unwrap_or_else(|e| exit_with_error(&format!("Flowchart generation failed: {}", e)))
}

fn run_linear(labels: Vec<String>, options: &FlowOptions) -> DiagramMessage {
    let steps = LinearSteps(labels)
        .into_steps()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert labels: {}", e)));

    options
        .builder()
        .build(&steps)
        .unwrap_or_else(|e| exit_with_error(&format!("Flowchart generation failed: {}", e)))
}

fn run_pie(data_path: &str, title: Option<String>) -> DiagramMessage {
    let data_json = read_input(data_path);
    let raw_slices: Vec<RawSlice> = serde_json::from_str(&data_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse pie data JSON: {}", e)));

    let builder = title.map(PieChartBuilder::new).unwrap_or_default();
    builder
        .build(raw_slices.into_iter().map(|s| (s.label, s.value)))
        .unwrap_or_else(|e| exit_with_error(&format!("Pie chart generation failed: {}", e)))
}

fn print_message(message: &DiagramMessage, output: OutputFormat) {
    match output {
        OutputFormat::Message => print!("{}", message.content),
        OutputFormat::Diagram => print!("{}", message.diagram),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(message).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to serialize message: {}", e))
            });
            println!("{}", json);
        }
    }
}

/// Reads a whole file, or stdin when the path is '-'.
fn read_input(path: &str) -> String {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to read stdin: {}", e)));
        buffer
    } else {
        fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read file '{}': {}", path, e))
        })
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
