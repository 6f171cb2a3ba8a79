use clap::Parser;
use std::io::{BufRead, IsTerminal, Read, Write};

use termcraft::{Output, Terminal, TerminalOptions};

#[derive(Parser)]
#[command(name = "termcraft")]
#[command(about = "A tiny in-memory terminal for learning basic commands")]
#[command(version)]
struct Cli {
    /// Execute commands from the argument (one per line)
    #[arg(short = 'c')]
    script: Option<String>,

    /// Working directory at startup
    #[arg(long = "cwd")]
    cwd: Option<String>,

    /// Output results as JSON, one object per command
    #[arg(long = "json")]
    json: bool,

    /// Script file with one command per line
    #[arg()]
    script_file: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let mut terminal = Terminal::new(TerminalOptions {
        cwd: cli.cwd,
        ..Default::default()
    });

    // Determine input source: -c, file, piped stdin, or interactive.
    let script = if let Some(s) = cli.script {
        Some(s)
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read_to_string(file) {
            Ok(content) => Some(content),
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", file, e);
                std::process::exit(1);
            }
        }
    } else if std::io::stdin().is_terminal() {
        None
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).unwrap_or_default();
        Some(buf)
    };

    match script {
        Some(script) => {
            let mut failed = false;
            for line in script.lines() {
                if let Some(output) = terminal.execute_line(line) {
                    failed |= output.is_error();
                    render(&output, cli.json);
                }
            }
            std::process::exit(if failed { 1 } else { 0 });
        }
        None => repl(&mut terminal, cli.json),
    }
}

/// Interactive read-eval-print loop.
fn repl(terminal: &mut Terminal, json: bool) {
    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("{} $ ", terminal.cwd());
        let _ = std::io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF
            Ok(_) => {}
        }

        if let Some(output) = terminal.execute_line(&line) {
            render(&output, json);
        }
    }
}

/// The renderer: match on the output kind, nothing else.
fn render(output: &Output, json: bool) {
    if json {
        println!("{}", serde_json::to_string(output).unwrap_or_default());
        return;
    }
    match output {
        Output::Ls { entries } => {
            if !entries.is_empty() {
                println!("{}", entries.join("\n"));
            }
        }
        Output::Cat { content } | Output::Text { content } => println!("{}", content),
        Output::Empty => {}
        Output::Error { message, .. } => eprintln!("{}", message),
    }
}
