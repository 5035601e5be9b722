//! Interactive console menu
//!
//! Reads one answer per line. Every prompt returns to the main menu on invalid
//! input; end of input ends the session.

use crate::validate;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use student_gen::core::models::{Evaluation, Person};
use student_gen::core::{GradeReport, Registrar};
use student_gen::{verbose, warn};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Main menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Register,
    Find,
    Grade,
    Enroll,
    StudentsSummary,
    CoursesSummary,
    CourseAverage,
    Exit,
}

impl MenuOption {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::Register),
            "2" => Some(Self::Find),
            "3" => Some(Self::Grade),
            "4" => Some(Self::Enroll),
            "5" => Some(Self::StudentsSummary),
            "6" => Some(Self::CoursesSummary),
            "7" => Some(Self::CourseAverage),
            "8" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the menu on stdin/stdout until the user exits
///
/// # Errors
/// Returns an error if the terminal cannot be read or written.
pub fn run(registrar: &mut Registrar) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(registrar, &mut stdin.lock(), &mut stdout.lock(), Local::now().date_naive())
        .run()
}

/// One interactive session over arbitrary input and output
pub struct Session<'a, R, W> {
    registrar: &'a mut Registrar,
    input: &'a mut R,
    out: &'a mut W,
    today: NaiveDate,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session; `today` bounds accepted birth dates
    pub fn new(
        registrar: &'a mut Registrar,
        input: &'a mut R,
        out: &'a mut W,
        today: NaiveDate,
    ) -> Self {
        Self {
            registrar,
            input,
            out,
            today,
        }
    }

    /// Loop over the main menu until exit or end of input
    ///
    /// # Errors
    /// Returns an error if the input cannot be read or the output cannot be written.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            let Some(option) = MenuOption::parse(&choice) else {
                writeln!(self.out, "✗ Unknown option '{}'. Choose 1-8.\n", choice.trim())?;
                continue;
            };
            match option {
                MenuOption::Register => self.register()?,
                MenuOption::Find => self.find()?,
                MenuOption::Grade => self.grade()?,
                MenuOption::Enroll => self.enroll()?,
                MenuOption::StudentsSummary => self.students_summary()?,
                MenuOption::CoursesSummary => self.courses_summary()?,
                MenuOption::CourseAverage => self.course_average()?,
                MenuOption::Exit => break,
            }
        }
        writeln!(self.out, "Goodbye!")?;
        self.out.flush()
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "|-------------------------------|")?;
        writeln!(self.out, "| Welcome to StudentGen         |")?;
        writeln!(self.out, "|-------------------------------|")?;
        writeln!(self.out, "| Select 1 option:              |")?;
        writeln!(self.out, "| . 1 Register Student          |")?;
        writeln!(self.out, "| . 2 Find Student              |")?;
        writeln!(self.out, "| . 3 Grade Student             |")?;
        writeln!(self.out, "| . 4 Enroll Student to Course  |")?;
        writeln!(self.out, "| . 5 Show Students Summary     |")?;
        writeln!(self.out, "| . 6 Show Courses Summary      |")?;
        writeln!(self.out, "| . 7 Show Course Average       |")?;
        writeln!(self.out, "| . 8 Exit                      |")?;
        writeln!(self.out, "|-------------------------------|")?;
        self.out.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Print a prompt and read the answer; `None` on end of input
    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}: ")?;
        self.out.flush()?;
        self.read_line()
    }

    /// Ask and validate; prints the validation error and yields `None` on failure
    fn ask_valid<T>(
        &mut self,
        label: &str,
        check: impl FnOnce(&str) -> Result<T, String>,
    ) -> io::Result<Option<T>> {
        let Some(raw) = self.ask(label)? else {
            return Ok(None);
        };
        match check(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(message) => {
                writeln!(self.out, "\n✗ ERROR: {message}\n")?;
                Ok(None)
            }
        }
    }

    fn register(&mut self) -> io::Result<()> {
        let Some(id) = self.ask_valid("Student ID", |s| validate::student_id(s).map(str::to_string))?
        else {
            return Ok(());
        };
        if self.registrar.is_registered(&id) {
            writeln!(self.out, "\n✗ ERROR: Student ID '{id}' already exists!\n")?;
            return Ok(());
        }
        let Some(name) = self.ask_valid("Name", |s| validate::name(s).map(str::to_string))? else {
            return Ok(());
        };
        let Some(email) = self.ask_valid("Email", |s| validate::email(s).map(str::to_string))?
        else {
            return Ok(());
        };
        let today = self.today;
        let Some(birth_date) =
            self.ask_valid("Birth Date (DD/MM/YYYY)", |s| validate::birth_date(s, today))?
        else {
            return Ok(());
        };

        match self
            .registrar
            .register_student(Person::new(id, name, email, birth_date))
        {
            Ok(student) => {
                let shown = student.to_string();
                writeln!(self.out, "\n✓ Student registered successfully!")?;
                writeln!(self.out, "{shown}\n")?;
            }
            Err(e) => writeln!(self.out, "\n✗ ERROR: {e}\n")?,
        }
        Ok(())
    }

    fn find(&mut self) -> io::Result<()> {
        let Some(id) = self.ask("Student ID")? else {
            return Ok(());
        };
        let id = id.trim();
        let message = match self.registrar.find_student(id) {
            Some(student) => {
                let average = student
                    .average_grade()
                    .map_or_else(|| "no grades yet".to_string(), |avg| format!("{avg:.2}"));
                format!("✓ Student Found:\n{student}\nAverage grade: {average}")
            }
            None => format!("✗ Student with ID {id} not found."),
        };
        writeln!(self.out, "\n{message}\n")
    }

    fn ask_student_and_course(&mut self) -> io::Result<Option<(String, String)>> {
        let Some(id) = self.ask("Student ID")? else {
            return Ok(None);
        };
        let Some(code) = self.ask_valid("Course Code", validate::course_code)? else {
            return Ok(None);
        };
        Ok(Some((id.trim().to_string(), code)))
    }

    fn grade(&mut self) -> io::Result<()> {
        let Some((id, code)) = self.ask_student_and_course()? else {
            return Ok(());
        };
        match self.registrar.grade_student(&id, &code) {
            Ok(report) => self.show_grade(&report),
            Err(e) => {
                warn!("Grading {id} in {code} failed: {e}");
                writeln!(self.out, "\n✗ {e}\n")
            }
        }
    }

    fn show_grade(&mut self, report: &GradeReport) -> io::Result<()> {
        writeln!(self.out, "{RULE}")?;
        writeln!(
            self.out,
            "Student {} graded in {}",
            report.student_id, report.course.name
        )?;
        writeln!(self.out, "Grade: {:.2}/100", report.grade)?;
        if report.passed {
            writeln!(self.out, "Status: ✓ PASSED")?;
        } else {
            writeln!(self.out, "Status: ✗ FAILED")?;
        }
        writeln!(self.out, "{RULE}\n")
    }

    fn enroll(&mut self) -> io::Result<()> {
        let Some((id, code)) = self.ask_student_and_course()? else {
            return Ok(());
        };
        match self.registrar.enroll_student(&id, &code) {
            Ok(newly_enrolled) => {
                let course_name = self
                    .registrar
                    .find_course(&code)
                    .map_or_else(|| code.clone(), |c| c.name);
                if newly_enrolled {
                    writeln!(self.out, "\n✓ Student {id} enrolled in {course_name}\n")
                } else {
                    writeln!(self.out, "\n✓ Student {id} is already enrolled in {course_name}\n")
                }
            }
            Err(e) => writeln!(self.out, "\n✗ {e}\n"),
        }
    }

    fn students_summary(&mut self) -> io::Result<()> {
        let mut text = String::from("\nEnrolled Students\n");
        for row in self.registrar.students_summary() {
            text.push_str(&format!("{}\n", row.student));
            if row.enrollments.is_empty() {
                text.push_str("\tNo course found.\n");
                continue;
            }
            text.push_str("\tEnrolled Courses\n");
            for enrollment in row.enrollments {
                text.push_str(&format!("\t{}\n", enrollment.course));
                if let Some(grade) = enrollment.grade {
                    text.push_str(&format!("\t\tGrade: {grade:.2}\n"));
                }
            }
        }
        writeln!(self.out, "{text}")
    }

    fn courses_summary(&mut self) -> io::Result<()> {
        let mut text = String::from("\nCourses\n");
        for row in self.registrar.courses_summary() {
            text.push_str(&format!(
                "\t{} {} ({} credits) - {} enrolled\n",
                row.code, row.name, row.credits, row.roster_size
            ));
        }
        writeln!(self.out, "{text}")
    }

    fn course_average(&mut self) -> io::Result<()> {
        let Some(code) = self.ask_valid("Course Code", validate::course_code)? else {
            return Ok(());
        };
        match self.registrar.course_average(&code) {
            Ok(Some(avg)) => writeln!(self.out, "\nAverage grade for {code}: {avg:.2}\n"),
            Ok(None) => writeln!(self.out, "\nNo grades recorded for {code} yet.\n"),
            Err(e) => writeln!(self.out, "\n✗ {e}\n"),
        }
    }
}

/// Build the registrar for a session from the effective settings
pub fn build_registrar(seed: Option<u64>, demo_students: bool) -> Registrar {
    let mut registrar = seed.map_or_else(Registrar::default, Registrar::with_seed);
    if demo_students {
        registrar.seed_demo_students();
        verbose!("Demo students 001, 002 and 003 registered");
    }
    registrar
}
