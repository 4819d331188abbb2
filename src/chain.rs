// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Chain of responsibility: a patient walking through hospital departments.
//!
//! Every department performs its own step (unless it was already done) and
//! then hands the patient to the next department in the chain.

use crate::Console;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patient {
    pub name: String,
    pub registration_done: bool,
    pub doctor_check_up_done: bool,
    pub medicine_done: bool,
    pub payment_done: bool,
}

impl Patient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A link in the chain.
pub trait Department {
    fn execute(&self, patient: &mut Patient);
}

/// Which step a [`Desk`] is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Reception,
    Doctor,
    Medical,
    Cashier,
}

impl Step {
    fn done(self, patient: &mut Patient) -> &mut bool {
        match self {
            Self::Reception => &mut patient.registration_done,
            Self::Doctor => &mut patient.doctor_check_up_done,
            Self::Medical => &mut patient.medicine_done,
            Self::Cashier => &mut patient.payment_done,
        }
    }

    fn already_done(self) -> &'static str {
        match self {
            Self::Reception => "Patient registration already done",
            Self::Doctor => "Doctor checkup already done",
            Self::Medical => "Medicine already given to patient",
            Self::Cashier => "Payment Done",
        }
    }

    fn action(self) -> &'static str {
        match self {
            Self::Reception => "Reception registering patient",
            Self::Doctor => "Doctor checking patient",
            Self::Medical => "Medical giving medicine to patient",
            Self::Cashier => "Cashier getting money from patient",
        }
    }
}

/// A department handling one [`Step`], optionally followed by another.
pub struct Desk {
    step: Step,
    console: Console,
    next: Option<Box<dyn Department>>,
}

impl Desk {
    pub fn new(step: Step, console: Console) -> Self {
        Self {
            step,
            console,
            next: None,
        }
    }

    /// Links `next` after this desk, builder style.
    pub fn then(mut self, next: impl Department + 'static) -> Self {
        self.next = Some(Box::new(next));
        self
    }

    pub fn set_next(&mut self, next: Box<dyn Department>) {
        self.next = Some(next);
    }
}

impl Department for Desk {
    fn execute(&self, patient: &mut Patient) {
        let done = self.step.done(patient);
        if *done {
            self.console.println(self.step.already_done());
        } else {
            *done = true;
            self.console
                .println(format!("{} {}", self.step.action(), patient.name));
        }

        if let Some(next) = &self.next {
            next.execute(patient);
        }
    }
}

/// Builds the standard `Reception -> Doctor -> Medical -> Cashier` chain.
pub fn hospital(console: &Console) -> Desk {
    let cashier = Desk::new(Step::Cashier, console.clone());
    let medical = Desk::new(Step::Medical, console.clone()).then(cashier);
    let doctor = Desk::new(Step::Doctor, console.clone()).then(medical);
    Desk::new(Step::Reception, console.clone()).then(doctor)
}

pub fn run(console: &Console) {
    let mut patient = Patient::new("abc");
    hospital(console).execute(&mut patient);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_chain_performs_every_step() {
        let console = Console::capture();
        let mut patient = Patient::new("abc");
        hospital(&console).execute(&mut patient);

        assert!(patient.registration_done);
        assert!(patient.doctor_check_up_done);
        assert!(patient.medicine_done);
        assert!(patient.payment_done);
        assert_eq!(
            console.lines(),
            vec![
                "Reception registering patient abc",
                "Doctor checking patient abc",
                "Medical giving medicine to patient abc",
                "Cashier getting money from patient abc",
            ]
        );
    }

    #[test]
    fn completed_steps_are_skipped() {
        let console = Console::capture();
        let mut patient = Patient::new("xyz");
        patient.registration_done = true;
        patient.payment_done = true;
        hospital(&console).execute(&mut patient);

        let lines = console.lines();
        assert_eq!(lines[0], "Patient registration already done");
        assert_eq!(lines[3], "Payment Done");
    }

    #[test]
    fn single_desk_stops_the_chain() {
        let console = Console::capture();
        let mut patient = Patient::new("abc");
        Desk::new(Step::Doctor, console.clone()).execute(&mut patient);

        assert!(patient.doctor_check_up_done);
        assert!(!patient.medicine_done);
        assert_eq!(console.lines().len(), 1);
    }

    #[test]
    fn set_next_links_boxed_department() {
        let console = Console::capture();
        let mut reception = Desk::new(Step::Reception, console.clone());
        reception.set_next(Box::new(Desk::new(Step::Cashier, console.clone())));

        let mut patient = Patient::new("abc");
        reception.execute(&mut patient);
        assert!(patient.payment_done);
    }
}
