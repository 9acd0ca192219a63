//! The interactive command loop.
//!
//! A `Session` owns one `ContactBook` and dispatches parsed commands to
//! it; all user interaction goes through a reedline editor. Nothing here
//! mutates the book except through the book's own operations.

mod prompt;

use crate::config::Config;
use crate::error::StorageError;
use crate::models::{ContactBook, Record};
use crate::storage::{BookStore, JsonFileStore};
use prompt::ReplPrompt;
use reedline::{Reedline, Signal};
use std::io;

/// One interactive command, parsed from a menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Hello,
    Save,
    Load,
    Exit,
}

impl Command {
    /// Parse a trimmed, lowercased menu choice. Unknown input is `None`
    /// and must not mutate any state.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "add" => Some(Self::Add),
            "change" => Some(Self::Change),
            "phone" => Some(Self::Phone),
            "all" => Some(Self::All),
            "add-birthday" => Some(Self::AddBirthday),
            "show-birthday" => Some(Self::ShowBirthday),
            "birthdays" => Some(Self::Birthdays),
            "hello" => Some(Self::Hello),
            "save" => Some(Self::Save),
            "load" => Some(Self::Load),
            "close" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// An interactive session: the book plus the loaded configuration.
pub struct Session {
    book: ContactBook,
    config: Config,
}

impl Session {
    /// Start a session with an empty book.
    pub fn new(config: Config) -> Self {
        Self {
            book: ContactBook::new(),
            config,
        }
    }

    /// The session's book, for inspection.
    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    /// Run the command loop until the user exits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut rl = Reedline::create();

        loop {
            print_menu();
            match rl.read_line(&ReplPrompt::new("Enter your choice: "))? {
                Signal::Success(line) => {
                    let choice = line.trim().to_lowercase();
                    if choice.is_empty() {
                        continue;
                    }
                    match Command::parse(&choice) {
                        Some(command) => {
                            if !self.dispatch(command, &mut rl)? {
                                break;
                            }
                        }
                        None => {
                            println!("Invalid choice. Please choose from the available commands.")
                        }
                    }
                }
                Signal::CtrlC | Signal::CtrlD => {
                    println!("\nGoodbye!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Execute one command. Returns `false` when the session should end.
    fn dispatch(&mut self, command: Command, rl: &mut Reedline) -> io::Result<bool> {
        match command {
            Command::Add => {
                let Some(name) = prompt_value(rl, "Enter contact name: ")? else {
                    return Ok(true);
                };
                let Some(phone) = prompt_value(rl, "Enter contact phone number: ")? else {
                    return Ok(true);
                };
                match Record::new(name) {
                    Ok(mut record) => {
                        record.add_phone(&phone);
                        self.book.add_record(record);
                        println!("Contact added.");
                    }
                    Err(e) => println!("{}", e),
                }
            }

            Command::Change => {
                let Some(name) = prompt_value(rl, "Enter contact name: ")? else {
                    return Ok(true);
                };
                let Some(new_phone) = prompt_value(rl, "Enter new phone number: ")? else {
                    return Ok(true);
                };
                match self.book.edit_phone(&name, &new_phone) {
                    Ok(true) => println!("Phone number updated."),
                    Ok(false) => println!("Contact not found."),
                    Err(e) => println!("{}", e),
                }
            }

            Command::Phone => {
                let Some(name) = prompt_value(rl, "Enter contact name: ")? else {
                    return Ok(true);
                };
                match self.book.find(&name) {
                    Some(record) => {
                        let phones = record
                            .phones()
                            .iter()
                            .map(|p| p.as_str())
                            .collect::<Vec<_>>()
                            .join(", ");
                        println!("Phone number for {}: {}", record.name(), phones);
                    }
                    None => println!("Contact not found."),
                }
            }

            Command::All => {
                if self.book.is_empty() {
                    println!("Address book is empty.");
                } else {
                    println!("Address book contents:");
                    for record in self.book.iter() {
                        println!("{}", record);
                    }
                }
            }

            Command::AddBirthday => {
                let Some(name) = prompt_value(rl, "Enter contact name: ")? else {
                    return Ok(true);
                };
                let Some(birthday) = prompt_value(rl, "Enter birthday (DD.MM.YYYY): ")? else {
                    return Ok(true);
                };
                if self.book.add_birthday(&name, &birthday) {
                    println!("Birthday added.");
                } else {
                    println!("Contact not found or invalid birthday format.");
                }
            }

            Command::ShowBirthday => {
                let Some(name) = prompt_value(rl, "Enter contact name: ")? else {
                    return Ok(true);
                };
                match self.book.find(&name).and_then(|r| r.birthday()) {
                    Some(birthday) => println!("Birthday for {}: {}", name, birthday),
                    None => println!("Contact not found or no birthday set."),
                }
            }

            Command::Birthdays => {
                for (weekday, names) in self.book.birthdays_in_next_week() {
                    println!("{}: {}", weekday, names.join(", "));
                }
            }

            Command::Hello => println!("Hello! How can I assist you today?"),

            Command::Save => {
                let Some(path) = self.prompt_path(rl, "Enter filename to save address book")?
                else {
                    return Ok(true);
                };
                match JsonFileStore::new(&path).save(&self.book) {
                    Ok(()) => println!("Address book saved to file."),
                    Err(e) => println!("{}", e),
                }
            }

            Command::Load => {
                let Some(path) = self.prompt_path(rl, "Enter filename to load address book from")?
                else {
                    return Ok(true);
                };
                match JsonFileStore::new(&path).load() {
                    Ok(book) => {
                        self.book = book;
                        println!("Address book loaded from file.");
                    }
                    // Missing file is not fatal: keep the current book.
                    Err(StorageError::NotFound(_)) => {
                        println!("File not found. Creating a new address book.")
                    }
                    Err(e) => println!("{}", e),
                }
            }

            Command::Exit => {
                println!("Goodbye!");
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Prompt for a file path; empty input falls back to the configured
    /// default book path.
    fn prompt_path(&self, rl: &mut Reedline, text: &str) -> io::Result<Option<String>> {
        let prompt = format!("{} (default: {}): ", text, self.config.book_path);
        Ok(prompt_value(rl, &prompt)?.map(|input| {
            if input.is_empty() {
                self.config.book_path.clone()
            } else {
                input
            }
        }))
    }
}

fn print_menu() {
    println!("\nAvailable commands:");
    println!("--> add - Add a new contact with name and phone number.");
    println!("--> change - Change phone number for a contact.");
    println!("--> phone - Show phone number for a contact.");
    println!("--> all - Show all contacts.");
    println!("--> add-birthday - Add birthday for a contact.");
    println!("--> show-birthday - Show birthday for a contact.");
    println!("--> birthdays - Show upcoming birthdays for the next week.");
    println!("--> hello - Get a greeting from the bot.");
    println!("--> save - Save address book to file.");
    println!("--> load - Load address book from file.");
    println!("--> close or exit - Close the program.");
}

/// Read one trimmed line. `None` means the user cancelled (Ctrl-C/Ctrl-D),
/// which aborts the current command without ending the session.
fn prompt_value(rl: &mut Reedline, text: &str) -> io::Result<Option<String>> {
    match rl.read_line(&ReplPrompt::new(text))? {
        Signal::Success(line) => Ok(Some(line.trim().to_string())),
        Signal::CtrlC | Signal::CtrlD => Ok(None),
    }
}
