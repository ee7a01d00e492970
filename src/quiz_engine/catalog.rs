//! Curated word problems.
//!
//! Catalogs are static data, so every entry is validated once at load time:
//! operands must parse with positive denominators, and the result must be a
//! non-negative value the option display can carry. A bad entry is a
//! `MalformedCatalogEntry` naming its index.

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    arithmetic::solve,
    error::QuizError,
    fraction::format_display,
    models::{FractionValue, Operator, ProblemTemplate},
};

/// Wire form of one catalog entry; operands are strings like `"2 1/2"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub text: String,
    pub operand_a: String,
    #[serde(deserialize_with = "deserialize_operator")]
    pub operator: Operator,
    pub operand_b: String,
    #[serde(default)]
    pub unit: String,
}

fn deserialize_operator<'de, D>(deserializer: D) -> Result<Operator, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.as_str() {
        "add" | "+" => Ok(Operator::Add),
        "subtract" | "-" => Ok(Operator::Subtract),
        other => Err(serde::de::Error::custom(format!("unknown operator: {other}"))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    problems: Vec<ProblemTemplate>,
}

impl Catalog {
    /// Validate and wrap a list of templates.
    pub fn new(problems: Vec<ProblemTemplate>) -> Result<Self, QuizError> {
        if problems.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }
        for (index, problem) in problems.iter().enumerate() {
            validate_problem(index, problem)?;
        }
        Ok(Catalog { problems })
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, QuizError> {
        let problems = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry_to_template(index, entry))
            .collect::<Result<Vec<_>, _>>()?;
        Catalog::new(problems)
    }

    /// Load a JSON array of [`CatalogEntry`] objects.
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Catalog::from_entries(entries)
    }

    /// The ten word problems of the original activity.
    pub fn builtin() -> Self {
        let raw: [(&str, (u32, u32, u32), Operator, (u32, u32, u32), &str); 10] = [
            ("Sarah ate 1/4 of a pizza and John ate 1/3 of the same pizza. \
              How much pizza did they eat together?",
             (0, 1, 4), Operator::Add, (0, 1, 3), "of the pizza"),
            ("A recipe calls for 3/4 cup of sugar, but you only have 1/2 cup. \
              How much more sugar do you need?",
             (0, 3, 4), Operator::Subtract, (0, 1, 2), "cup"),
            ("Tom ran 2 1/2 miles on Monday and 1 3/4 miles on Tuesday. \
              How many miles did he run in total?",
             (2, 1, 2), Operator::Add, (1, 3, 4), "miles"),
            ("A tank is 5/6 full of water. After using 1/3 of the tank, \
              how much water is left?",
             (0, 5, 6), Operator::Subtract, (0, 1, 3), "of the tank"),
            ("Emma has 3/5 of a chocolate bar and gives 1/4 to her friend. \
              How much does she have left?",
             (0, 3, 5), Operator::Subtract, (0, 1, 4), "of the bar"),
            ("A piece of wood is 4 1/3 feet long. If you cut off 2 1/2 feet, \
              how long is the remaining piece?",
             (4, 1, 3), Operator::Subtract, (2, 1, 2), "feet"),
            ("In a garden, 2/5 of the flowers are roses and 1/4 are tulips. \
              What fraction of the flowers are roses or tulips?",
             (0, 2, 5), Operator::Add, (0, 1, 4), "of the flowers"),
            ("A container holds 3 3/4 liters of juice. After pouring out 1 2/3 liters, \
              how much juice remains?",
             (3, 3, 4), Operator::Subtract, (1, 2, 3), "liters"),
            ("Mike spent 1/6 of his allowance on candy and 1/3 on games. \
              What fraction of his allowance did he spend in total?",
             (0, 1, 6), Operator::Add, (0, 1, 3), "of his allowance"),
            ("A rope is 5 1/2 meters long. If you cut off 2 3/4 meters, \
              how long is the remaining rope?",
             (5, 1, 2), Operator::Subtract, (2, 3, 4), "meters"),
        ];

        let problems = raw
            .into_iter()
            .map(|(text, (wa, na, da), operator, (wb, nb, db), unit)| ProblemTemplate {
                text: text.to_string(),
                operand_a: FractionValue { negative: false, whole: wa, numerator: na, denominator: da },
                operator,
                operand_b: FractionValue { negative: false, whole: wb, numerator: nb, denominator: db },
                unit: unit.to_string(),
            })
            .collect();
        Catalog { problems }
    }

    pub fn problems(&self) -> &[ProblemTemplate] {
        &self.problems
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

fn entry_to_template(index: usize, entry: CatalogEntry) -> Result<ProblemTemplate, QuizError> {
    let operand = |raw: &str| {
        raw.parse::<FractionValue>().map_err(|e| QuizError::MalformedCatalogEntry {
            index,
            reason: e.to_string(),
        })
    };
    Ok(ProblemTemplate {
        operand_a: operand(&entry.operand_a)?,
        operand_b: operand(&entry.operand_b)?,
        text: entry.text,
        operator: entry.operator,
        unit: entry.unit,
    })
}

fn validate_problem(index: usize, problem: &ProblemTemplate) -> Result<(), QuizError> {
    let malformed = |reason: String| QuizError::MalformedCatalogEntry { index, reason };

    if problem.text.trim().is_empty() {
        return Err(malformed("problem text is empty".to_string()));
    }
    for operand in [problem.operand_a, problem.operand_b] {
        if operand.denominator() == 0 {
            return Err(malformed(format!("operand {} has a zero denominator", operand)));
        }
        if operand.is_negative() {
            return Err(malformed(format!("operand {} is negative", operand)));
        }
    }
    let answer = solve(problem);
    if answer.starts_with('-') {
        return Err(malformed(format!(
            "{} {} {} gives a negative amount ({answer})",
            problem.operand_a, problem.operator, problem.operand_b
        )));
    }
    format_display(&answer).map_err(|e| malformed(e.to_string()))?;
    Ok(())
}
