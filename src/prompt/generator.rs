//! Prompt generation from a question, a kernel count and a category.
//!
//! Each category has a built-in template that can be replaced through the
//! config file. Templates see these variables:
//!
//! | variable          | categories  | value                         |
//! |-------------------|-------------|-------------------------------|
//! | `question`        | all         | the submitted question        |
//! | `kernels`         | all         | requested answer count        |
//! | `correct`         | math, logic | kernels / 10 (math), kernels * 0.2 (logic) |
//! | `sign_variations` | math        | kernels / 2                   |
//! | `uncertain`       | math, logic | kernels / 2 - kernels / 10 (math), kernels * 0.8 (logic) |
//!
//! Split values are rendered with one decimal place.

use super::category::Category;
use super::template::{TemplateError, Variables, render_template};
use std::collections::HashMap;

pub const MATH_TEMPLATE: &str = "Generate exactly {kernels} unique answers divided as follows: \
{correct} correct, {sign_variations} sign variations, {uncertain} uncertain. Question: {question}";

pub const LOGIC_TEMPLATE: &str = "Generate exactly {kernels} unique logical answers with reasoning \
divided as follows: {correct} correct, {uncertain} uncertain. Question: {question}";

pub const MCQ_TEMPLATE: &str =
    "Generate {kernels} unique MCQ-style answers with full working. Question: {question}";

pub const OTHER_TEMPLATE: &str =
    "Generate {kernels} distinct answers showing full reasoning. Question: {question}";

/// A rendered prompt, ready to be encoded into a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPrompt {
    pub category: Category,
    pub text: String,
}

/// The template set used to render prompts.
#[derive(Debug, Clone, Default)]
pub struct PromptTemplates {
    overrides: HashMap<Category, String>,
}

impl PromptTemplates {
    /// Templates with every category overridable by `overrides`.
    pub fn with_overrides(overrides: HashMap<Category, String>) -> Self {
        Self { overrides }
    }

    /// The template text in effect for `category`.
    pub fn template_for(&self, category: Category) -> &str {
        self.overrides
            .get(&category)
            .map(String::as_str)
            .unwrap_or_else(|| builtin_template(category))
    }

    /// Render the prompt for a question.
    pub fn generate(
        &self,
        question: &str,
        kernels: u32,
        category: Category,
    ) -> Result<GeneratedPrompt, TemplateError> {
        let variables = template_variables(question, kernels, category);
        let text = render_template(self.template_for(category), &variables)?;
        Ok(GeneratedPrompt { category, text })
    }

    /// Render every category once with sample input.
    ///
    /// Returns the first category whose template fails, so a broken override
    /// can be reported before any request is served.
    pub fn check(&self) -> Result<(), (Category, TemplateError)> {
        for category in Category::ALL {
            self.generate("sample question", 1, category)
                .map_err(|e| (category, e))?;
        }
        Ok(())
    }
}

/// The built-in template for a category.
pub fn builtin_template(category: Category) -> &'static str {
    match category {
        Category::Math => MATH_TEMPLATE,
        Category::Logic => LOGIC_TEMPLATE,
        Category::Mcq => MCQ_TEMPLATE,
        Category::Other => OTHER_TEMPLATE,
    }
}

/// Build the variables a template for `category` may reference.
pub fn template_variables(question: &str, kernels: u32, category: Category) -> Variables {
    let mut vars = Variables::new();
    vars.insert("question", question.to_string());
    vars.insert("kernels", kernels.to_string());

    let n = f64::from(kernels);
    match category {
        Category::Math => {
            let correct = n / 10.0;
            let sign_variations = n / 2.0;
            let uncertain = sign_variations - correct;
            vars.insert("correct", one_decimal(correct));
            vars.insert("sign_variations", one_decimal(sign_variations));
            vars.insert("uncertain", one_decimal(uncertain));
        }
        Category::Logic => {
            vars.insert("correct", one_decimal(n * 0.2));
            vars.insert("uncertain", one_decimal(n * 0.8));
        }
        Category::Mcq | Category::Other => {}
    }

    vars
}

fn one_decimal(x: f64) -> String {
    format!("{x:.1}")
}
