use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

const ABOUT_LONG: &str = "\
Count, encode and decode tokens using OpenAI's tiktoken encodings.

When called without a subcommand, it defaults to counting tokens.

Examples:
  # Count tokens using default encoding (cl100k_base)
  echo \"Hello, world!\" | tiktoken

  # Count tokens from argument
  tiktoken \"Hello, world!\"

  # Count tokens for a specific model
  tiktoken -m gpt-4o \"Hello, world!\"

  # Encode text to token IDs
  tiktoken encode \"Hello, world!\"

  # Decode token IDs back to text
  tiktoken decode 15339 11 1917 0";

#[derive(Parser)]
#[command(name = "tiktoken")]
#[command(about = "A CLI tool for counting tokens using OpenAI's tiktoken", long_about = ABOUT_LONG)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "TIKTOKEN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the default count behavior
    #[command(flatten)]
    pub count: TextArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count tokens in the given text
    #[command(long_about = "\
Count the number of tokens in the provided text using the specified model or encoding.

If no text is provided as an argument, it reads from stdin.

Examples:
  tiktoken count \"Hello, world!\"
  echo \"Hello, world!\" | tiktoken count
  tiktoken count -m gpt-4o \"Hello, world!\"
  cat myfile.txt | tiktoken count")]
    Count(TextArgs),

    /// Encode text to token IDs
    #[command(long_about = "\
Encode the provided text into token IDs using the specified model or encoding.

If no text is provided as an argument, it reads from stdin.

Examples:
  tiktoken encode \"Hello, world!\"
  tiktoken encode -e o200k_base \"Hello, world!\"
  echo \"Hello, world!\" | tiktoken encode")]
    Encode(TextArgs),

    /// Decode token IDs back to text
    #[command(long_about = "\
Decode token IDs back to text using the specified model or encoding.

Token IDs can be provided as arguments or piped through stdin (whitespace separated).

Examples:
  tiktoken decode 15339 1917 0
  echo \"15339 1917 0\" | tiktoken decode
  tiktoken encode \"Hello, world!\" | tiktoken decode")]
    Decode(TokenArgs),

    /// List available models and their encodings
    Models,

    /// Print the version information
    Version,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct EncodingArgs {
    /// OpenAI model name (e.g., gpt-4o, gpt-4, gpt-3.5-turbo); overrides --encoding
    #[arg(short, long)]
    pub model: Option<String>,

    /// Encoding name (o200k_base, cl100k_base, p50k_base, p50k_edit, r50k_base) [default: cl100k_base]
    #[arg(short, long)]
    pub encoding: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TextArgs {
    #[command(flatten)]
    pub encoding: EncodingArgs,

    /// Text to tokenize (read from stdin when omitted)
    pub text: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TokenArgs {
    #[command(flatten)]
    pub encoding: EncodingArgs,

    /// Token IDs to decode (read from stdin when omitted)
    #[arg(allow_negative_numbers = true)]
    pub tokens: Vec<String>,
}
