use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    jarinstaller completions --shell bash > ~/.bash_completion.d/jarinstaller\n\n\
                  Generate zsh completions:\n    jarinstaller completions --shell zsh > ~/.zfunc/_jarinstaller\n\n\
                  Generate fish completions:\n    jarinstaller completions --shell fish > ~/.config/fish/completions/jarinstaller.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: Shell,
}
