use crate::Score;
use crate::error::Result;
use crate::model::{Cohort, Student};

const NAMES: [&str; 25] = [
    "Aydin Mata",
    "Nico Horton",
    "Georgie Burgess",
    "Natalie Atkinson",
    "Lexie Vaughn",
    "Augustus Summers",
    "Joyce Stephenson",
    "Lyric Bryant",
    "Austin Owens",
    "Colten Walsh",
    "Amari Tanner",
    "Julie Patrick",
    "Jaydon Dean",
    "Kassandra Mcconnell",
    "Travis Riggs",
    "Leonidas Meadows",
    "Yasmine Bowman",
    "Omari Vaughan",
    "Peter Hudson",
    "Randy Lam",
    "Charles Warren",
    "Camryn Garcia",
    "Jamir Baker",
    "Harley Crawford",
    "Ashtyn Lucas",
];

const SAC: [Score; 25] = [
    95, 92, 85, 83, 78, 75, 68, 66, 65, 61, 60, 59, 58, 55, 52, 51, 50, 45, 41, 39, 36, 34, 32,
    31, 25,
];

const EXAM: [Score; 25] = [
    96, 95, 91, 87, 83, 82, 77, 75, 74, 70, 68, 67, 66, 65, 63, 61, 60, 58, 57, 56, 54, 53, 52,
    51, 51,
];

/// Built-in 25-student sample class.
pub fn demo_cohort() -> Result<Cohort> {
    let students = NAMES
        .iter()
        .zip(SAC.iter().zip(EXAM.iter()))
        .map(|(name, (&sac, &exam))| Student::named(*name, sac, exam))
        .collect();
    Cohort::new(students)
}
