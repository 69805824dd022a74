//! Interactive console menu driving the bank

use std::io::{self, BufRead, Write};

use banking_core::utils::{parse_amount, try_parse_amount};
use banking_core::{format_amount, AccountKind, Bank, BankError};
use bigdecimal::BigDecimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Exit,
    CreateAccount,
    Deposit,
    Withdraw,
    AccountInformation,
}

impl MenuChoice {
    fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            0 => Some(MenuChoice::Exit),
            1 => Some(MenuChoice::CreateAccount),
            2 => Some(MenuChoice::Deposit),
            3 => Some(MenuChoice::Withdraw),
            4 => Some(MenuChoice::AccountInformation),
            _ => None,
        }
    }
}

/// Text menu over arbitrary input and output streams
pub struct Menu<R, W> {
    input: R,
    output: W,
    bank: Bank,
    bank_name: String,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, bank: Bank, bank_name: String) -> Self {
        Self {
            input,
            output,
            bank,
            bank_name,
        }
    }

    #[cfg(test)]
    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        match self.run_loop() {
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                tracing::debug!("input closed, leaving menu");
                Ok(())
            }
            other => other,
        }
    }

    fn run_loop(&mut self) -> io::Result<()> {
        self.print_header()?;
        loop {
            self.print_menu()?;
            let choice = self.read_choice()?;
            if choice == MenuChoice::Exit {
                writeln!(self.output, "Thank you for using the application! :-)")?;
                return Ok(());
            }
            self.perform(choice)?;
        }
    }

    fn print_header(&mut self) -> io::Result<()> {
        let title = format!("| Welcome to {} |", self.bank_name);
        let border = format!("+{}+", "-".repeat(title.chars().count() - 2));
        writeln!(self.output, "{border}")?;
        writeln!(self.output, "{title}")?;
        writeln!(self.output, "{border}")
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Please make a selection")?;
        writeln!(self.output, "1) Create a secret Account")?;
        writeln!(self.output, "2) Deposit")?;
        writeln!(self.output, "3) Withdraw")?;
        writeln!(self.output, "4) Account Information")?;
        writeln!(self.output, "0) Exit")
    }

    fn read_choice(&mut self) -> io::Result<MenuChoice> {
        loop {
            writeln!(self.output, "Enter your secret choice: ")?;
            let line = self.read_line()?;
            match line.parse::<i64>() {
                Ok(selection) => match MenuChoice::from_selection(selection) {
                    Some(choice) => return Ok(choice),
                    None => writeln!(
                        self.output,
                        "Selection was outside of range. Try a lower number!"
                    )?,
                },
                Err(_) => writeln!(self.output, "Invalid selection. Numbers only please?")?,
            }
        }
    }

    fn perform(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::CreateAccount => self.create_account(),
            MenuChoice::Deposit => self.make_deposit(),
            MenuChoice::Withdraw => self.make_withdrawal(),
            MenuChoice::AccountInformation => self.list_balances(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn create_account(&mut self) -> io::Result<()> {
        self.display_header("Create an Account")?;
        let kind = self.ask_account_kind()?;
        let first_name = self.ask("Please enter your first name: ")?;
        let last_name = self.ask("Please enter your last name: ")?;
        let social_id = self.ask("Please enter your fake social security number: ")?;
        let initial_deposit = self.ask_initial_deposit(kind)?;

        match self.bank.open_customer(
            first_name,
            last_name,
            social_id,
            kind.token(),
            initial_deposit,
        ) {
            Ok(index) => writeln!(
                self.output,
                "Account created. Your selection number is {}.",
                index + 1
            ),
            Err(err) => {
                writeln!(self.output, "Account was not created successfully: {err}")
            }
        }
    }

    fn ask_account_kind(&mut self) -> io::Result<AccountKind> {
        let choices: Vec<&str> = AccountKind::ALL.iter().map(|kind| kind.token()).collect();
        let question = format!("Please enter an account type: {{{}}}: ", choices.join("/"));
        loop {
            let answer = self.ask(&question)?;
            match answer.parse::<AccountKind>() {
                Ok(kind) => return Ok(kind),
                Err(_) => writeln!(self.output, "Invalid selection. Please try again.")?,
            }
        }
    }

    fn ask_initial_deposit(&mut self, kind: AccountKind) -> io::Result<BigDecimal> {
        let minimum = kind.minimum_deposit();
        loop {
            writeln!(self.output, "Please enter an initial deposit:")?;
            let line = self.read_line()?;
            match try_parse_amount(&line) {
                Some(amount) if amount >= minimum => return Ok(amount),
                Some(_) => writeln!(
                    self.output,
                    "A top secret {} account requires a minimum of a ${} deposit.",
                    kind.token(),
                    minimum
                )?,
                None => writeln!(self.output, "Deposit must be a number.")?,
            }
        }
    }

    fn make_deposit(&mut self) -> io::Result<()> {
        self.display_header("Make a Deposit")?;
        if let Some(index) = self.select_account()? {
            let amount = parse_amount(&self.ask("How much would you like to deposit?: ")?);
            if let Err(err) = self.bank.deposit(index, &amount) {
                writeln!(self.output, "{err}")?;
            }
        }
        Ok(())
    }

    fn make_withdrawal(&mut self) -> io::Result<()> {
        self.display_header("Make a Withdraw")?;
        if let Some(index) = self.select_account()? {
            let amount = parse_amount(&self.ask("How much would you like to withdraw?: ")?);
            match self.bank.withdraw(index, &amount) {
                Ok(()) => {}
                Err(BankError::InsufficientFunds { available, .. }) => writeln!(
                    self.output,
                    "You only have ${} in your account.",
                    format_amount(&available)
                )?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        Ok(())
    }

    fn list_balances(&mut self) -> io::Result<()> {
        self.display_header("List Account Details")?;
        if let Some(index) = self.select_account()? {
            match self.bank.customer_at(index) {
                Ok(customer) => writeln!(self.output, "{}", customer.account())?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        Ok(())
    }

    fn select_account(&mut self) -> io::Result<Option<usize>> {
        if self.bank.is_empty() {
            writeln!(self.output, "No customers at your bank.")?;
            return Ok(None);
        }

        writeln!(self.output, "Select an account:")?;
        for (i, customer) in self.bank.customers().iter().enumerate() {
            writeln!(self.output, "\t{}) {}", i + 1, customer.summary())?;
        }

        let line = self.ask("Please enter your selection: ")?;
        let selected = line
            .parse::<i64>()
            .ok()
            .and_then(|selection| self.bank.select(selection).ok());
        if selected.is_none() {
            writeln!(self.output, "Invalid account selected.")?;
        }
        Ok(selected)
    }

    fn display_header(&mut self, header: &str) -> io::Result<()> {
        let border = format!("+{}+", "-".repeat(header.chars().count() + 6));
        writeln!(self.output)?;
        writeln!(self.output, "{border}")?;
        writeln!(self.output, "|   {header}   |")?;
        writeln!(self.output, "{border}")
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }
}
