use super::domain::{AnswerDomain, CategoryId, FivePointAnswer, QuestionKey, TernaryAnswer};
use serde::Serialize;
use std::collections::HashSet;

/// One selectable answer as shown to the owner. Labels vary per question, tokens do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub token: &'static str,
    pub label: &'static str,
}

/// Canned analysis sentences for a question, picked by its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narrative {
    pub positive: &'static str,
    pub partial: &'static str,
    pub negative: &'static str,
}

impl Narrative {
    /// 5 reads positive, 1 reads negative, anything else (including unanswered) partial.
    pub fn for_score(&self, score: u8) -> &'static str {
        match score {
            5 => self.positive,
            1 => self.negative,
            _ => self.partial,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionTemplate {
    pub key: QuestionKey,
    pub prompt: &'static str,
    pub category: CategoryId,
    pub domain: AnswerDomain,
    pub options: Vec<AnswerOption>,
    #[serde(skip)]
    pub narrative: Narrative,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("question '{0}' is missing from the catalog")]
    MissingQuestion(QuestionKey),
    #[error("question '{0}' appears more than once")]
    DuplicateQuestion(QuestionKey),
    #[error("category '{category}' owns {actual} question(s), expected {expected}")]
    CategorySize {
        category: CategoryId,
        expected: usize,
        actual: usize,
    },
    #[error("question '{key}' offers token '{token}' outside its {domain:?} domain")]
    ForeignToken {
        key: QuestionKey,
        token: &'static str,
        domain: AnswerDomain,
    },
    #[error("question '{key}' offers token '{token}' twice")]
    DuplicateToken { key: QuestionKey, token: &'static str },
    #[error("question '{0}' offers no answers")]
    NoOptions(QuestionKey),
}

/// Ordered questionnaire definition. Order drives navigation, not scoring.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<QuestionTemplate>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn from_questions(questions: Vec<QuestionTemplate>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[QuestionTemplate] {
        &self.questions
    }

    pub fn question(&self, key: QuestionKey) -> Option<&QuestionTemplate> {
        self.questions.iter().find(|question| question.key == key)
    }

    pub fn position(&self, key: QuestionKey) -> Option<usize> {
        self.questions.iter().position(|question| question.key == key)
    }

    pub fn questions_for(&self, category: CategoryId) -> Vec<&QuestionTemplate> {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Table-consistency check. A failure here is a build-time content bug, so
    /// callers refuse to start rather than score against a broken table.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.key) {
                return Err(CatalogError::DuplicateQuestion(question.key));
            }
            if question.options.is_empty() {
                return Err(CatalogError::NoOptions(question.key));
            }

            let mut tokens = HashSet::new();
            for option in &question.options {
                if !question.domain.accepts(option.token) {
                    return Err(CatalogError::ForeignToken {
                        key: question.key,
                        token: option.token,
                        domain: question.domain,
                    });
                }
                if !tokens.insert(option.token) {
                    return Err(CatalogError::DuplicateToken {
                        key: question.key,
                        token: option.token,
                    });
                }
            }
        }

        if let Some(missing) = QuestionKey::ordered()
            .into_iter()
            .find(|key| !seen.contains(key))
        {
            return Err(CatalogError::MissingQuestion(missing));
        }

        for category in CategoryId::ordered() {
            let actual = self
                .questions
                .iter()
                .filter(|question| question.category == category)
                .count();
            if actual != category.question_count() {
                return Err(CatalogError::CategorySize {
                    category,
                    expected: category.question_count(),
                    actual,
                });
            }
        }

        Ok(())
    }
}

fn ternary(yes: &'static str, no: &'static str, dont_know: &'static str) -> Vec<AnswerOption> {
    vec![
        AnswerOption {
            token: TernaryAnswer::Yes.token(),
            label: yes,
        },
        AnswerOption {
            token: TernaryAnswer::No.token(),
            label: no,
        },
        AnswerOption {
            token: TernaryAnswer::DontKnow.token(),
            label: dont_know,
        },
    ]
}

fn five_point(labels: [&'static str; 5]) -> Vec<AnswerOption> {
    [
        FivePointAnswer::Excellent,
        FivePointAnswer::Good,
        FivePointAnswer::Average,
        FivePointAnswer::Poor,
        FivePointAnswer::VeryPoor,
    ]
    .into_iter()
    .zip(labels)
    .map(|(answer, label)| AnswerOption {
        token: answer.token(),
        label,
    })
    .collect()
}

fn standard_questions() -> Vec<QuestionTemplate> {
    vec![
        QuestionTemplate {
            key: QuestionKey::FinancialStatements,
            prompt: "Do you have audited financial statements for the last three years?",
            category: CategoryId::Financial,
            domain: AnswerDomain::Ternary,
            options: ternary("Yes, all three years", "No", "Not sure"),
            narrative: Narrative {
                positive: "Audited statements for the last three years give buyers a reliable financial picture.",
                partial: "The financial statements are incomplete or unverified; buyers will discount what they cannot confirm.",
                negative: "Without audited statements buyers cannot verify results, which weakens valuation and slows diligence.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::ExpenseSeparation,
            prompt: "Are personal and business expenses fully separated?",
            category: CategoryId::Financial,
            domain: AnswerDomain::Ternary,
            options: ternary("Fully separated", "No, they are mixed", "Not sure"),
            narrative: Narrative {
                positive: "Personal and business expenses are kept apart, so reported profit reflects the business itself.",
                partial: "Some personal expenses may still run through the business and will need to be normalized.",
                negative: "Mixed personal and business expenses obscure true profitability and invite buyer scrutiny.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::CashFlow,
            prompt: "How would you rate the stability of the business cash flow?",
            category: CategoryId::Financial,
            domain: AnswerDomain::FivePoint,
            options: five_point([
                "Excellent: steady and predictable",
                "Good: mostly steady",
                "Average: some volatility",
                "Poor: frequent shortfalls",
                "Very poor: unpredictable",
            ]),
            narrative: Narrative {
                positive: "Cash flow is stable and predictable, one of the strongest value drivers for a buyer.",
                partial: "Cash flow shows some volatility; buyers will look for explanations and may price in risk.",
                negative: "Unpredictable cash flow is a major concern for buyers and lenders alike.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::FinancingReady,
            prompt: "Could a buyer obtain financing based on the current financial records?",
            category: CategoryId::Financial,
            domain: AnswerDomain::Ternary,
            options: ternary("Yes", "No", "I don't know"),
            narrative: Narrative {
                positive: "The records support acquisition financing, which widens the pool of potential buyers.",
                partial: "It is unclear whether the records would satisfy a lender; this may narrow the buyer pool.",
                negative: "Records that cannot support financing limit the sale to cash buyers and lower the price.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::OwnerDependency,
            prompt: "How well does the business run without your daily involvement?",
            category: CategoryId::OwnerDependency,
            domain: AnswerDomain::FivePoint,
            options: vec![
                AnswerOption {
                    token: FivePointAnswer::Excellent.token(),
                    label: "It runs fully without me",
                },
                AnswerOption {
                    token: FivePointAnswer::Good.token(),
                    label: "I am involved but not critical",
                },
                AnswerOption {
                    token: FivePointAnswer::Poor.token(),
                    label: "Most decisions go through me",
                },
                AnswerOption {
                    token: FivePointAnswer::VeryPoor.token(),
                    label: "It cannot run without me",
                },
            ],
            narrative: Narrative {
                positive: "The business operates independently of the owner, making the transition low risk for a buyer.",
                partial: "The business still leans on the owner for key decisions; a buyer will want a transition plan.",
                negative: "The business depends on the owner to function, which is the single largest discount factor in a sale.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::EmployeeManagement,
            prompt: "Is there a manager or senior employee who can run daily operations?",
            category: CategoryId::OwnerDependency,
            domain: AnswerDomain::Ternary,
            options: ternary("Yes", "No", "Partially / not sure"),
            narrative: Narrative {
                positive: "A capable manager already runs daily operations and can stay on after the sale.",
                partial: "Management capacity below the owner is limited or untested.",
                negative: "No one besides the owner can run daily operations today.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::WrittenProcedures,
            prompt: "Are key work processes documented in written procedures?",
            category: CategoryId::OwnerDependency,
            domain: AnswerDomain::Ternary,
            options: ternary("Yes, documented", "No", "Partially"),
            narrative: Narrative {
                positive: "Documented procedures let a new owner take over operations with little friction.",
                partial: "Only some processes are written down; undocumented knowledge remains a transfer risk.",
                negative: "Processes live only in people's heads, which makes the handover hard to trust.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::PhysicalAssets,
            prompt: "Are the physical assets (equipment, inventory, vehicles) in good condition and listed?",
            category: CategoryId::Assets,
            domain: AnswerDomain::Ternary,
            options: ternary("Yes", "No", "Not sure"),
            narrative: Narrative {
                positive: "Physical assets are in good condition and inventoried, supporting the asking price.",
                partial: "The condition or inventory of physical assets is not fully clear.",
                negative: "Physical assets are worn or unlisted; buyers will discount them or ask for repairs.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::IntangibleAssets,
            prompt: "Are intangible assets (brand, trademarks, domains, IP) registered to the business?",
            category: CategoryId::Assets,
            domain: AnswerDomain::Ternary,
            options: ternary("Yes, registered", "No", "Not sure"),
            narrative: Narrative {
                positive: "Brand and intellectual property are registered and can transfer cleanly to a buyer.",
                partial: "Ownership of some intangible assets is unclear and should be confirmed.",
                negative: "Intangible assets are not protected, so part of the business value may not transfer.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::AssetManagement,
            prompt: "Do you keep an up-to-date asset register with maintenance records?",
            category: CategoryId::Assets,
            domain: AnswerDomain::Ternary,
            options: ternary("Yes", "No", "Partially"),
            narrative: Narrative {
                positive: "An up-to-date asset register shows buyers the assets are well managed.",
                partial: "Asset records exist but are incomplete or out of date.",
                negative: "There is no asset register, so buyers must verify every asset themselves.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::ContractsUpdated,
            prompt: "Are contracts with customers, suppliers, and employees current and signed?",
            category: CategoryId::Legal,
            domain: AnswerDomain::Ternary,
            options: ternary("Yes", "No", "Some of them"),
            narrative: Narrative {
                positive: "Key contracts are current and signed, giving buyers confidence in continuity.",
                partial: "Some contracts are outdated or unsigned and should be brought up to date.",
                negative: "Missing or expired contracts expose the buyer to risk and will surface in diligence.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::Licenses,
            prompt: "Does the business hold all required licenses and permits, and are they transferable?",
            category: CategoryId::Legal,
            domain: AnswerDomain::Ternary,
            options: ternary("Yes", "No", "Not sure"),
            narrative: Narrative {
                positive: "All licenses and permits are in place and transferable.",
                partial: "The status or transferability of some licenses is uncertain.",
                negative: "Missing licenses or permits can block the sale outright.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::LegalRisks,
            prompt: "Is the business free of pending lawsuits, claims, or regulatory issues?",
            category: CategoryId::Legal,
            domain: AnswerDomain::Ternary,
            options: ternary("Yes, no open issues", "No, there are open issues", "Not sure"),
            narrative: Narrative {
                positive: "No pending legal or regulatory issues were reported.",
                partial: "Possible legal exposure has not been fully reviewed.",
                negative: "Open legal or regulatory issues will need to be resolved or disclosed before a sale.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::LoyalCustomers,
            prompt: "How would you rate the loyalty and diversity of your customer base?",
            category: CategoryId::Marketing,
            domain: AnswerDomain::FivePoint,
            options: five_point([
                "Excellent: loyal and well diversified",
                "Good: mostly recurring customers",
                "Average: some concentration",
                "Poor: a few customers dominate",
                "Very poor: no recurring base",
            ]),
            narrative: Narrative {
                positive: "A loyal, diversified customer base gives buyers confidence that revenue will continue.",
                partial: "Customer loyalty or concentration raises some questions about future revenue.",
                negative: "Revenue depends on few or non-recurring customers, which buyers see as high risk.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::CrmData,
            prompt: "Is customer data organized in a CRM or similar system?",
            category: CategoryId::Marketing,
            domain: AnswerDomain::Ternary,
            options: ternary("Yes", "No", "Partially"),
            narrative: Narrative {
                positive: "Customer data is organized and can be handed over with the business.",
                partial: "Customer data is only partly organized.",
                negative: "Customer data is not organized, so relationships may leave with the owner.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::MarketingPlan,
            prompt: "Do you have a documented marketing plan with measurable results?",
            category: CategoryId::Marketing,
            domain: AnswerDomain::Ternary,
            options: ternary("Yes", "No", "Partially"),
            narrative: Narrative {
                positive: "A documented marketing plan shows buyers how new business is generated.",
                partial: "Marketing activity exists but is not documented or measured consistently.",
                negative: "There is no marketing plan, so growth potential is hard for a buyer to assess.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::ReadyToShow,
            prompt: "Is the business (premises, books, operations) ready to be shown to buyers?",
            category: CategoryId::Presentation,
            domain: AnswerDomain::Ternary,
            options: ternary("Yes", "No", "Not yet sure"),
            narrative: Narrative {
                positive: "The business is ready to be presented to buyers today.",
                partial: "Some preparation is still needed before presenting the business to buyers.",
                negative: "The business is not ready to be shown, which delays any sale process.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::TeaserReady,
            prompt: "Have you prepared a teaser or information memorandum for buyers?",
            category: CategoryId::Presentation,
            domain: AnswerDomain::Ternary,
            options: ternary("Yes", "No", "In progress"),
            narrative: Narrative {
                positive: "A teaser is ready to attract qualified buyers while keeping the sale confidential.",
                partial: "Sale materials are in progress or incomplete.",
                negative: "There are no sale materials to introduce the business to buyers.",
            },
        },
        QuestionTemplate {
            key: QuestionKey::KpisAvailable,
            prompt: "Can you present key performance indicators (KPIs) for the business?",
            category: CategoryId::Presentation,
            domain: AnswerDomain::Ternary,
            options: ternary("Yes", "No", "Some of them"),
            narrative: Narrative {
                positive: "Key performance indicators are tracked and ready to present.",
                partial: "Only some KPIs are tracked; buyers will ask for the rest.",
                negative: "No KPIs are tracked, so buyers cannot benchmark the business.",
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_consistent() {
        let catalog = QuestionCatalog::standard();
        assert_eq!(catalog.validate(), Ok(()));
        assert_eq!(catalog.len(), 19);

        let order: Vec<QuestionKey> = catalog.questions().iter().map(|q| q.key).collect();
        assert_eq!(order, QuestionKey::ordered().to_vec());
    }

    #[test]
    fn domain_mix_matches_questionnaire() {
        let catalog = QuestionCatalog::standard();
        let five_point: Vec<QuestionKey> = catalog
            .questions()
            .iter()
            .filter(|q| q.domain == AnswerDomain::FivePoint)
            .map(|q| q.key)
            .collect();
        assert_eq!(
            five_point,
            vec![
                QuestionKey::CashFlow,
                QuestionKey::OwnerDependency,
                QuestionKey::LoyalCustomers
            ]
        );

        let owner = catalog
            .question(QuestionKey::OwnerDependency)
            .expect("owner dependency present");
        let tokens: Vec<&str> = owner.options.iter().map(|o| o.token).collect();
        assert_eq!(tokens, vec!["excellent", "good", "poor", "very_poor"]);
    }

    #[test]
    fn validate_flags_category_size_mismatch() {
        let mut questions = standard_questions();
        questions[0].category = CategoryId::Legal;
        let err = QuestionCatalog::from_questions(questions)
            .validate()
            .expect_err("financial shrinks to three");
        assert_eq!(
            err,
            CatalogError::CategorySize {
                category: CategoryId::Financial,
                expected: 4,
                actual: 3,
            }
        );
    }

    #[test]
    fn validate_flags_missing_and_duplicate_questions() {
        let mut questions = standard_questions();
        questions.pop();
        let err = QuestionCatalog::from_questions(questions.clone())
            .validate()
            .expect_err("kpis missing");
        assert_eq!(err, CatalogError::MissingQuestion(QuestionKey::KpisAvailable));

        questions.push(questions[0].clone());
        let err = QuestionCatalog::from_questions(questions)
            .validate()
            .expect_err("duplicate key");
        assert_eq!(
            err,
            CatalogError::DuplicateQuestion(QuestionKey::FinancialStatements)
        );
    }

    #[test]
    fn validate_flags_tokens_outside_domain() {
        let mut questions = standard_questions();
        questions[1].options.push(AnswerOption {
            token: "excellent",
            label: "Spotless",
        });
        let err = QuestionCatalog::from_questions(questions)
            .validate()
            .expect_err("ternary question cannot offer five-point token");
        assert!(matches!(
            err,
            CatalogError::ForeignToken {
                key: QuestionKey::ExpenseSeparation,
                token: "excellent",
                ..
            }
        ));
    }

    #[test]
    fn narrative_selection_follows_score() {
        let narrative = &standard_questions()[0].narrative;
        assert_eq!(narrative.for_score(5), narrative.positive);
        assert_eq!(narrative.for_score(1), narrative.negative);
        for score in [0, 2, 3, 4] {
            assert_eq!(narrative.for_score(score), narrative.partial);
        }
    }
}
