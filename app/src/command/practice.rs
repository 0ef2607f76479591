//! Interactive practice: one ticket at a time, with hints and checks on the
//! current proposed solution.

use std::io::Write;
use std::path::PathBuf;

use ticketgen_core::{Difficulty, Evaluation, LLMProvider, Ticket, Trainer, describe_failure};
use tracing::info;

use super::check::print_evaluation;

#[derive(Debug, Clone)]
pub struct PracticeInput {
    pub config: Option<PathBuf>,
    pub difficulty: Option<Difficulty>,
    pub model: Option<String>,
}

/// Strategy for the interactive practice loop.
#[derive(Debug, Clone, Copy)]
pub struct PracticeStrategy;

impl super::CommandStrategy for PracticeStrategy {
    type Input = PracticeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(input.config.as_deref())?;
        let difficulty = input.difficulty.unwrap_or(config.trainer.difficulty);
        let trainer = super::build_trainer(&config, input.model);

        println!("ticketgen practice ({difficulty}). Type 'help' for commands.\n");

        let mut session = new_session(&trainer, difficulty).await;
        super::print_ticket(&session.ticket);

        loop {
            let line = prompt("> ")?;
            let Some(line) = line else { break };

            match Action::parse(&line) {
                Action::Solution(text) => {
                    let text = if text.is_empty() {
                        prompt("Your solution: ")?.unwrap_or_default()
                    } else {
                        text
                    };
                    session.set_solution(&text);
                }
                Action::Hint => {
                    if !session.has_solution() {
                        println!("Write a solution first ('solution <text>').");
                        continue;
                    }
                    let level = session.ticket.difficulty;
                    match trainer
                        .hints(&session.ticket.record.issue, &session.solution, level)
                        .await
                    {
                        Ok(hints) => {
                            println!("\n{}\n{hints}\n", level.hint_style().title());
                            session.record_hints(hints);
                        }
                        Err(e) => eprintln!("Error: {}", describe_failure(&e)),
                    }
                }
                Action::Check => {
                    if !session.has_solution() {
                        println!("Write a solution first ('solution <text>').");
                        continue;
                    }
                    match trainer
                        .check_solution(&session.ticket.record.issue, &session.solution)
                        .await
                    {
                        Ok(evaluation) => {
                            println!();
                            print_evaluation(&evaluation);
                            println!();
                            session.record_evaluation(evaluation);
                        }
                        Err(e) => eprintln!("Error: {}", describe_failure(&e)),
                    }
                }
                Action::New => {
                    session = new_session(&trainer, difficulty).await;
                    super::print_ticket(&session.ticket);
                    continue;
                }
                Action::Show => {
                    super::print_ticket(&session.ticket);
                    continue;
                }
                Action::Help => {
                    print_help();
                    continue;
                }
                Action::Quit => break,
                Action::Unknown(cmd) => {
                    println!("Unknown command: {cmd}. Type 'help' for commands.");
                    continue;
                }
            }

            if let Some(summary) = session.summary() {
                println!("{summary}\n");
            }
        }

        Ok(())
    }
}

async fn new_session<P: LLMProvider>(trainer: &Trainer<P>, difficulty: Difficulty) -> Session {
    info!("Generating {} ticket", difficulty);
    let generated = trainer.generate_ticket(difficulty).await;
    if let Some(error) = &generated.error {
        eprintln!("Error: {error}");
    }
    Session::new(generated.ticket)
}

/// Read one line; `None` at end of input.
fn prompt(label: &str) -> anyhow::Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush()?;
    let mut input = String::new();
    if std::io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn print_help() {
    println!("Commands:");
    println!("  solution <text>  set or revise your proposed solution");
    println!("  hint             get hints for the current solution");
    println!("  check            check whether the solution would fix the issue");
    println!("  show             show the ticket again");
    println!("  new              generate a new ticket");
    println!("  quit             leave");
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Solution(String),
    Hint,
    Check,
    New,
    Show,
    Help,
    Quit,
    Unknown(String),
}

impl Action {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match cmd.to_lowercase().as_str() {
            "s" | "solution" => Self::Solution(rest.trim().to_string()),
            "h" | "hint" | "hints" => Self::Hint,
            "c" | "check" => Self::Check,
            "n" | "new" => Self::New,
            "show" | "ticket" => Self::Show,
            "help" | "?" | "" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// State of one ticket: its solution and whatever feedback it has received.
#[derive(Debug)]
struct Session {
    ticket: Ticket,
    solution: String,
    hints: Option<String>,
    evaluation: Option<Evaluation>,
}

impl Session {
    const fn new(ticket: Ticket) -> Self {
        Self {
            ticket,
            solution: String::new(),
            hints: None,
            evaluation: None,
        }
    }

    fn set_solution(&mut self, solution: &str) {
        self.solution = solution.trim().to_string();
    }

    fn has_solution(&self) -> bool {
        !self.solution.is_empty()
    }

    fn record_hints(&mut self, hints: String) {
        self.hints = Some(hints);
    }

    fn record_evaluation(&mut self, evaluation: Evaluation) {
        self.evaluation = Some(evaluation);
    }

    /// Guidance on what to do next, once both hints and a verdict exist.
    fn summary(&self) -> Option<&'static str> {
        match (&self.hints, &self.evaluation) {
            (Some(_), Some(eval)) if eval.verdict.needs_revision() => {
                Some("🎯 Try revising your solution using the hints, then check again!")
            }
            (Some(_), Some(_)) => Some("🤔 You've received both hints and an evaluation."),
            (Some(_), None) => Some("Now check if your improved solution would work: 'check'"),
            _ => None,
        }
    }
}
