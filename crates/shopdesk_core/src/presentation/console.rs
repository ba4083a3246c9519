//! Interactive customer console.
//!
//! # Responsibility
//! - Render the numbered menu and collect free-text input line by line.
//! - Translate menu choices into `CustomerService` calls.
//!
//! # Invariants
//! - A non-numeric id skips the operation silently and returns to the menu.
//! - End of input behaves like choosing `Exit`.
//! - Customer names and emails are never written to logs.

use crate::model::customer::Customer;
use crate::model::record::RecordId;
use crate::presentation::{PresentationError, PresentationResult};
use crate::repo::record_repo::{RepoError, Repository, WriteOutcome};
use crate::service::customer_service::CustomerService;
use log::{info, warn};
use std::io::{BufRead, Write};

const MENU_LINES: [&str; 5] = [
    "1. List Customers",
    "2. Add Customer",
    "3. Update Customer",
    "4. Delete Customer",
    "5. Exit",
];

/// One console menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Add,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Parses a menu selection line.
    ///
    /// Surrounding whitespace is ignored on purpose, so `" 1 "` and a line
    /// ending in `\r` still select an option.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::List),
            "2" => Some(Self::Add),
            "3" => Some(Self::Update),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Customer menu bound to a service, an input reader and an output writer.
pub struct CustomerConsole<R, I, O>
where
    R: Repository<Customer>,
    I: BufRead,
    O: Write,
{
    service: CustomerService<R>,
    input: I,
    output: O,
}

impl<R, I, O> CustomerConsole<R, I, O>
where
    R: Repository<Customer>,
    I: BufRead,
    O: Write,
{
    pub fn new(service: CustomerService<R>, input: I, output: O) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs the menu loop until `Exit` or end of input.
    ///
    /// # Errors
    /// Returns only stdio failures. Repository failures are printed and the
    /// loop continues.
    pub fn run(&mut self) -> PresentationResult<()> {
        info!("event=console_start module=presentation status=ok");

        loop {
            for line in MENU_LINES {
                writeln!(self.output, "{line}")?;
            }
            let Some(selection) = self.prompt("Select an option: ")? else {
                break;
            };

            let step = match MenuChoice::parse(&selection) {
                Some(MenuChoice::List) => self.list_customers(),
                Some(MenuChoice::Add) => self.add_customer(),
                Some(MenuChoice::Update) => self.update_customer(),
                Some(MenuChoice::Delete) => self.delete_customer(),
                Some(MenuChoice::Exit) => break,
                None => {
                    writeln!(self.output, "Invalid option. Try again.")?;
                    Ok(Flow::Continue)
                }
            };

            match step {
                Ok(Flow::Continue) => {}
                Ok(Flow::InputClosed) => break,
                Err(PresentationError::Repo(err)) => self.report_repo_error(&err)?,
                Err(err) => return Err(err),
            }
        }

        info!("event=console_exit module=presentation status=ok");
        Ok(())
    }

    /// Returns the wrapped service, e.g. to inspect state after a session.
    pub fn into_service(self) -> CustomerService<R> {
        self.service
    }

    fn list_customers(&mut self) -> PresentationResult<Flow> {
        for customer in self.service.get_all()? {
            writeln!(self.output, "{customer}")?;
        }
        Ok(Flow::Continue)
    }

    fn add_customer(&mut self) -> PresentationResult<Flow> {
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(Flow::InputClosed);
        };
        let Some(email) = self.prompt("Enter Email: ")? else {
            return Ok(Flow::InputClosed);
        };

        self.service.create(name, email)?;
        writeln!(self.output, "Customer added successfully.")?;
        Ok(Flow::Continue)
    }

    fn update_customer(&mut self) -> PresentationResult<Flow> {
        let Some(raw_id) = self.prompt("Enter Customer ID to Update: ")? else {
            return Ok(Flow::InputClosed);
        };
        let Some(id) = parse_id(&raw_id) else {
            return Ok(Flow::Continue);
        };
        let Some(name) = self.prompt("Enter New Name: ")? else {
            return Ok(Flow::InputClosed);
        };
        let Some(email) = self.prompt("Enter New Email: ")? else {
            return Ok(Flow::InputClosed);
        };

        match self.service.update(id, name, email)? {
            WriteOutcome::Applied => writeln!(self.output, "Customer updated successfully.")?,
            WriteOutcome::Missing => writeln!(self.output, "No customer with ID {id}.")?,
        }
        Ok(Flow::Continue)
    }

    fn delete_customer(&mut self) -> PresentationResult<Flow> {
        let Some(raw_id) = self.prompt("Enter Customer ID to Delete: ")? else {
            return Ok(Flow::InputClosed);
        };
        let Some(id) = parse_id(&raw_id) else {
            return Ok(Flow::Continue);
        };

        match self.service.remove(id)? {
            WriteOutcome::Applied => writeln!(self.output, "Customer deleted successfully.")?,
            WriteOutcome::Missing => writeln!(self.output, "No customer with ID {id}.")?,
        }
        Ok(Flow::Continue)
    }

    /// Writes `label` without a newline and reads one line.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> PresentationResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn report_repo_error(&mut self, err: &RepoError) -> PresentationResult<()> {
        warn!("event=console_operation module=presentation status=error error={err}");
        writeln!(self.output, "Operation failed: {err}")?;
        Ok(())
    }
}

enum Flow {
    Continue,
    InputClosed,
}

fn parse_id(raw: &str) -> Option<RecordId> {
    raw.trim().parse().ok()
}
