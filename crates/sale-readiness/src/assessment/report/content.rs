use super::super::domain::CategoryId;

/// Added whenever the overall score is below the high tier.
pub const GENERIC_RECOMMENDATIONS: [&str; 3] = [
    "Schedule a valuation consultation with a business broker to set a realistic price range.",
    "Build a 6–12 month preparation plan that tackles the weakest areas first.",
    "Repeat this assessment after each improvement round to track progress.",
];

/// Shown only when nothing else was recommended.
pub const READY_RECOMMENDATIONS: [&str; 3] = [
    "Your business looks ready for sale. Consider engaging a broker to start the process.",
    "Prepare a confidential teaser and a list of qualified potential buyers.",
    "Keep financial reporting current so the numbers stay fresh throughout negotiations.",
];

/// Recommendation block for a category whose mean falls below the gate.
pub const fn category_recommendations(category: CategoryId) -> [&'static str; 3] {
    match category {
        CategoryId::Financial => [
            "Have an accountant prepare audited financial statements for the last three years.",
            "Separate all personal expenses from the business accounts and normalize reported profit.",
            "Build a 12-month cash flow forecast and document the drivers behind it.",
        ],
        CategoryId::OwnerDependency => [
            "Appoint or develop a manager who can run day-to-day operations.",
            "Document key work processes in written procedures.",
            "Gradually hand over customer and supplier relationships to the team.",
        ],
        CategoryId::Assets => [
            "Prepare a complete asset register with condition and maintenance history.",
            "Register trademarks, domains, and other intellectual property in the business name.",
            "Repair or dispose of worn equipment and clear obsolete inventory.",
        ],
        CategoryId::Legal => [
            "Review and renew contracts with customers, suppliers, and employees.",
            "Confirm that all licenses and permits are valid and transferable.",
            "Have a lawyer review pending claims and regulatory exposure before going to market.",
        ],
        CategoryId::Marketing => [
            "Reduce customer concentration and formalize recurring customer agreements.",
            "Move customer data into a CRM system that can be handed over with the business.",
            "Write a marketing plan with measurable goals and track its results.",
        ],
        CategoryId::Presentation => [
            "Prepare the premises, books, and operations for buyer visits.",
            "Prepare a teaser and an information memorandum for potential buyers.",
            "Define and track the key performance indicators buyers will ask about.",
        ],
    }
}
