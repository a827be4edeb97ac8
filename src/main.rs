// Minimal interactive shell around the annotation store.
//
// Stands in for the editor sidebar during development: `open` plays the
// active-file-changed event, the remaining commands mirror the panel's
// buttons and checkboxes.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use file_assistant::commands;
use file_assistant::host::Host;
use file_assistant::models::FileMetadata;
use file_assistant::storage::init_storage;

struct ShellHost {
    active: RefCell<Option<String>>,
}

impl Host for ShellHost {
    fn active_file(&self) -> Option<String> {
        self.active.borrow().clone()
    }

    fn prompt_input(&self, prompt: &str, placeholder: &str) -> Option<String> {
        print!("{} ({}): ", prompt, placeholder);
        io::stdout().flush().ok()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        let line = line.trim();
        if line.is_empty() {
            None
        } else {
            Some(line.to_string())
        }
    }

    fn show_info(&self, message: &str) {
        println!("{}", message);
    }

    fn update_view(&self, _path: &str, file_name: &str, metadata: &FileMetadata) {
        println!("== {} ==", file_name);
        if metadata.notes.is_empty() {
            println!("Notes: (none)");
        } else {
            println!("Notes:");
            for (index, note) in metadata.notes.iter().enumerate() {
                println!("  [{}] {}", index, note);
            }
        }
        if metadata.todos.is_empty() {
            println!("Todos: (none)");
        } else {
            println!("Todos:");
            for todo in &metadata.todos {
                let mark = if todo.completed { "x" } else { " " };
                println!("  [{}] #{} {}", mark, todo.id, todo.text);
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let storage = init_storage();
    let host = ShellHost {
        active: RefCell::new(None),
    };

    println!(
        "file-assistant shell. Commands: open <path>, note, todo, \
         toggle <id> <on|off>, delnote <index>, deltodo <id>, show, quit"
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let (cmd, rest) = input.split_once(' ').unwrap_or((input, ""));

        let result = match cmd {
            "open" => {
                let path = rest.trim();
                if path.is_empty() {
                    println!("usage: open <path>");
                } else {
                    *host.active.borrow_mut() = Some(path.to_string());
                    commands::view::refresh_view(&storage, &host);
                }
                Ok(())
            }
            "note" => commands::note::add_note(&storage, &host),
            "todo" => commands::todo::add_todo(&storage, &host),
            "toggle" => {
                let mut args = rest.split_whitespace();
                match (args.next().and_then(|s| s.parse::<u32>().ok()), args.next()) {
                    (Some(id), Some(flag)) => {
                        let completed = matches!(flag, "on" | "true" | "x");
                        commands::todo::toggle_todo(&storage, &host, id, completed)
                    }
                    _ => {
                        println!("usage: toggle <id> <on|off>");
                        Ok(())
                    }
                }
            }
            "delnote" => match rest.trim().parse::<usize>() {
                Ok(index) => commands::note::delete_note(&storage, &host, index),
                Err(_) => {
                    println!("usage: delnote <index>");
                    Ok(())
                }
            },
            "deltodo" => match rest.trim().parse::<u32>() {
                Ok(id) => commands::todo::delete_todo(&storage, &host, id),
                Err(_) => {
                    println!("usage: deltodo <id>");
                    Ok(())
                }
            },
            "show" | "refresh" => {
                commands::view::refresh_view(&storage, &host);
                Ok(())
            }
            "quit" | "exit" => break,
            _ => {
                println!("unknown command: {}", cmd);
                Ok(())
            }
        };

        if let Err(e) = result {
            eprintln!("{}", e);
        }
    }

    // shutdown safety net
    if let Err(e) = storage.flush() {
        eprintln!("{}", e);
    }
}
