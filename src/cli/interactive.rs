//! Interactive menu session
//!
//! The classic add/view/report/save loop. It is generic over its input and
//! output so it can be driven from tests as well as from a terminal. End of
//! input behaves like choosing "Save and Exit".

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::Settings;
use crate::display::{format_expense_report, format_transaction_register};
use crate::error::BudgetResult;
use crate::ledger::Session;
use crate::models::{Amount, TransactionKind};
use crate::storage::TransactionFile;

/// A menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Report,
    SaveAndExit,
}

impl MenuChoice {
    /// Parse the user's menu selection
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Report),
            "4" => Some(Self::SaveAndExit),
            _ => None,
        }
    }
}

const MENU: &str = "\n--- Personal Budget Tracker ---\n\
                    1. Add Transaction\n\
                    2. View Transactions\n\
                    3. Generate Expense Report\n\
                    4. Save and Exit\n";

/// Drives a [`Session`] from line-based user input
pub struct InteractiveSession<'a, R, W> {
    session: &'a mut Session,
    file: &'a TransactionFile,
    settings: &'a Settings,
    input: R,
    output: W,
    persist: bool,
}

impl<'a, R: BufRead, W: Write> InteractiveSession<'a, R, W> {
    pub fn new(
        session: &'a mut Session,
        file: &'a TransactionFile,
        settings: &'a Settings,
        input: R,
        output: W,
    ) -> Self {
        Self {
            session,
            file,
            settings,
            input,
            output,
            persist: true,
        }
    }

    /// Never write the data file, e.g. because it could not be read
    pub fn without_persistence(mut self) -> Self {
        self.persist = false;
        self
    }

    /// Run the menu loop until the user saves and exits
    pub fn run(mut self) -> BudgetResult<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option (1-4): ")? else {
                return self.save_and_exit();
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::Add) => {
                    if !self.add_transaction()? {
                        return self.save_and_exit();
                    }
                }
                Some(MenuChoice::View) => self.view_transactions()?,
                Some(MenuChoice::Report) => self.generate_report()?,
                Some(MenuChoice::SaveAndExit) => return self.save_and_exit(),
                None => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    /// Print `message` and read one line, `None` at end of input
    fn prompt(&mut self, message: &str) -> BudgetResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Collect and append one transaction; `false` if input ran out
    fn add_transaction(&mut self) -> BudgetResult<bool> {
        let Some(kind) = self.prompt("Enter 'income' or 'expense': ")? else {
            return Ok(false);
        };
        let Ok(kind) = kind.to_lowercase().parse::<TransactionKind>() else {
            writeln!(self.output, "Invalid type. Try again.")?;
            return Ok(true);
        };

        let Some(amount) = self.prompt("Enter amount: ")? else {
            return Ok(false);
        };
        let amount = match Amount::parse(&amount) {
            Ok(amount) => amount,
            Err(e) => {
                debug!(error = %e, "Rejected amount");
                writeln!(self.output, "Invalid amount. Try again.")?;
                return Ok(true);
            }
        };

        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(false);
        };
        let Some(category) = self.prompt("Enter category (e.g., Food, Transport): ")? else {
            return Ok(false);
        };

        match self.session.append(kind, amount, description, category) {
            Ok(_) => writeln!(self.output, "Transaction added successfully!")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(true)
    }

    fn view_transactions(&mut self) -> BudgetResult<()> {
        let register = format_transaction_register(
            self.session.transactions(),
            self.session.balance(),
            &self.settings.currency_symbol,
        );
        write!(self.output, "{}", register)?;
        Ok(())
    }

    fn generate_report(&mut self) -> BudgetResult<()> {
        let report = self.session.expense_report();
        let text = format_expense_report(report.as_ref(), &self.settings.currency_symbol);
        write!(self.output, "{}", text)?;
        Ok(())
    }

    fn save_and_exit(mut self) -> BudgetResult<()> {
        if !self.persist {
            writeln!(
                self.output,
                "Changes not saved: {} could not be read and was left untouched. Goodbye!",
                self.file.path().display()
            )?;
            return Ok(());
        }

        self.file.save_session(self.session)?;
        writeln!(self.output, "Data saved. Goodbye!")?;
        Ok(())
    }
}
