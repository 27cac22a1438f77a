//! Menu Loop
//!
//! Line-oriented operator front-end. Reads choices and field values from any
//! `BufRead`, writes prompts and results to any `Write`, and dispatches to
//! [`Gradebook`]. End of input at any prompt ends the session cleanly.

use std::io::{self, BufRead, ErrorKind, Write};

use crate::error::{GradebookError, Result};
use crate::gradebook::{Gradebook, Outcome};
use crate::presentation::{render_record, render_students, TableRenderer};
use crate::record::{Mark, NewStudent, Subjects};

const TITLE: &str = "===== Student Grade Management System =====";

const MENU_ITEMS: [&str; 6] = [
    "1. Add Student",
    "2. View All Students",
    "3. Search Student",
    "4. Update Marks",
    "5. Delete Student",
    "6. Exit",
];

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Input ran out mid-action
    Eof,
}

/// Run the menu until the operator exits or input ends
pub fn run<R, W>(
    gradebook: &Gradebook,
    renderer: &dyn TableRenderer,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session {
        gradebook,
        renderer,
        input,
        out,
        reported: Vec::new(),
    };
    session.run()
}

/// Parse the answer to "How many subjects?"
///
/// Only a plain non-negative integer is accepted.
pub fn parse_subject_count(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GradebookError::InvalidSubjectCount(trimmed.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| GradebookError::InvalidSubjectCount(trimmed.to_string()))
}

struct Session<'a, R, W> {
    gradebook: &'a Gradebook,
    renderer: &'a dyn TableRenderer,
    input: &'a mut R,
    out: &'a mut W,
    /// Warnings already shown during the current action
    reported: Vec<String>,
}

/// Read a prompt's answer or bail out of the action on EOF
macro_rules! answer {
    ($session:expr, $($prompt:tt)*) => {
        match $session.prompt(&format!($($prompt)*))? {
            Some(line) => line,
            None => return Ok(Flow::Eof),
        }
    };
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    fn run(&mut self) -> io::Result<()> {
        if let Some(notice) = self.renderer.notice() {
            writeln!(self.out, "{notice}")?;
        }

        loop {
            self.reported.clear();

            writeln!(self.out, "\n{TITLE}")?;
            for item in MENU_ITEMS {
                writeln!(self.out, "{item}")?;
            }

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return self.end_of_input();
            };

            let flow = match choice.as_str() {
                "1" => self.add_student()?,
                "2" => self.view_all()?,
                "3" => self.search_student()?,
                "4" => self.update_marks()?,
                "5" => self.delete_student()?,
                "6" => {
                    writeln!(self.out, "Exiting... Goodbye!")?;
                    return Ok(());
                }
                other => {
                    tracing::debug!("Unknown menu choice: {:?}", other);
                    writeln!(self.out, "Invalid choice! Try again.\n")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Eof {
                return self.end_of_input();
            }
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn add_student(&mut self) -> io::Result<Flow> {
        let id = answer!(self, "Enter Student ID: ");

        let exists = self.gradebook.contains(&id);
        self.report_warnings(&exists.warnings)?;
        if let Ok(true) = exists.result {
            self.report_error(&GradebookError::DuplicateId(id))?;
            return Ok(Flow::Continue);
        }

        let name = answer!(self, "Enter Student Name: ");
        let class = answer!(self, "Enter Class/Section: ");

        let count_input = answer!(self, "How many subjects? ");
        let count = match parse_subject_count(&count_input) {
            Ok(count) => count,
            Err(e) => {
                writeln!(self.out, "Error: {e}. Operation cancelled.")?;
                return Ok(Flow::Continue);
            }
        };

        let mut subjects = Subjects::new();
        for i in 1..=count {
            loop {
                let subject = answer!(self, "Subject {i} name: ");
                if subject.is_empty() {
                    writeln!(self.out, "Subject name cannot be empty.")?;
                    continue;
                }

                let mark_input = answer!(self, "Marks for {subject} (0-100): ");
                match Mark::parse(&mark_input) {
                    Ok(mark) => {
                        subjects.insert(subject, mark);
                        break;
                    }
                    Err(e) => writeln!(self.out, "{e}")?,
                }
            }
        }

        if subjects.is_empty() {
            writeln!(self.out, "No subjects added. Record saved with no marks.")?;
        }

        let outcome = self.gradebook.add(NewStudent {
            id,
            name,
            class,
            subjects,
        });
        self.finish(outcome, "Student added successfully!\n")
    }

    fn view_all(&mut self) -> io::Result<Flow> {
        let outcome = self.gradebook.list();
        self.report_warnings(&outcome.warnings)?;

        match outcome.result {
            Ok(records) if records.is_empty() => {
                writeln!(self.out, "No student records found!")?;
            }
            Ok(records) => {
                writeln!(self.out, "\n--- All Students ---")?;
                writeln!(self.out, "{}", render_students(self.renderer, &records))?;
                writeln!(self.out)?;
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn search_student(&mut self) -> io::Result<Flow> {
        let id = answer!(self, "Enter Student ID to search: ");

        let outcome = self.gradebook.search(&id);
        self.report_warnings(&outcome.warnings)?;

        let indent = self.gradebook.config().json_indent;
        match outcome.result.and_then(|record| render_record(&record, indent)) {
            Ok(text) => {
                writeln!(self.out, "\n--- Student Record ---")?;
                writeln!(self.out, "{text}\n")?;
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn update_marks(&mut self) -> io::Result<Flow> {
        let id = answer!(self, "Enter Student ID to update: ");

        let found = self.gradebook.search(&id);
        self.report_warnings(&found.warnings)?;
        let record = match found.result {
            Ok(record) => record,
            Err(e) => {
                self.report_error(&e)?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(self.out, "Updating marks for: {}", record.name)?;
        if record.subjects.is_empty() {
            self.report_error(&GradebookError::NoSubjects(id))?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out, "Current subjects:")?;
        for (subject, mark) in record.subjects.iter() {
            writeln!(self.out, "  {subject}: {mark}")?;
        }

        let subject = answer!(self, "Enter subject name to update: ");
        if !record.subjects.contains(&subject) {
            self.report_error(&GradebookError::UnknownSubject { id, subject })?;
            return Ok(Flow::Continue);
        }

        let mark = loop {
            let mark_input = answer!(self, "Enter new marks (0-100): ");
            match Mark::parse(&mark_input) {
                Ok(mark) => break mark,
                Err(e) => writeln!(self.out, "{e}")?,
            }
        };

        let outcome = self.gradebook.update_mark(&id, &subject, mark);
        self.finish(outcome, "Marks updated successfully!\n")
    }

    fn delete_student(&mut self) -> io::Result<Flow> {
        let id = answer!(self, "Enter Student ID to delete: ");

        let outcome = self.gradebook.delete(&id);
        self.finish(outcome, "Record deleted successfully!\n")
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Write `prompt`, read one line, trim it
    ///
    /// `Ok(None)` means input is exhausted. Interrupted reads are retried.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        loop {
            match self.input.read_line(&mut line) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(line.trim().to_string())),
                Err(e) if e.kind() == ErrorKind::Interrupted => {
                    line.clear();
                    continue;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn finish<T>(&mut self, outcome: Outcome<T>, success: &str) -> io::Result<Flow> {
        self.report_warnings(&outcome.warnings)?;
        match outcome.result {
            Ok(_) => writeln!(self.out, "{success}")?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    /// Print each distinct warning once per action
    ///
    /// Add and Update read the file twice, so the same load warning can
    /// arrive from both reads.
    fn report_warnings(&mut self, warnings: &[GradebookError]) -> io::Result<()> {
        for warning in warnings {
            let text = warning.to_string();
            if self.reported.contains(&text) {
                continue;
            }
            writeln!(self.out, "Warning: {text}")?;
            self.reported.push(text);
        }
        Ok(())
    }

    fn report_error(&mut self, error: &GradebookError) -> io::Result<()> {
        match error {
            GradebookError::NotFound(_) => writeln!(self.out, "Student not found!\n"),
            GradebookError::DuplicateId(_) => {
                writeln!(self.out, "Error: Student ID already exists!")
            }
            GradebookError::NoSubjects(_) => writeln!(
                self.out,
                "No subjects found for this student. Cannot update marks."
            ),
            GradebookError::UnknownSubject { .. } => {
                writeln!(self.out, "Subject not found for this student!\n")
            }
            other => writeln!(self.out, "Error: {other}"),
        }
    }

    fn end_of_input(&mut self) -> io::Result<()> {
        writeln!(self.out, "\nInput stream closed (EOF). Exiting non-interactively.")?;
        Ok(())
    }
}
