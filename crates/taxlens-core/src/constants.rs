/// Epsilon added to each L2 norm in cosine similarity.
pub const COSINE_NORM_EPSILON: f64 = 1e-10;

/// Side length of the identity matrix used when composition degrades.
pub const IDENTITY_PLACEHOLDER_DIM: usize = 10;

/// Confidence range returned when no weight artifacts are loaded.
pub const EMPTY_STORE_CONFIDENCE: (f64, f64) = (0.6, 0.9);

/// Confidence range returned when no loaded artifact could be compared.
pub const UNSCORED_CONFIDENCE: (f64, f64) = (0.7, 0.95);

/// Issue type keys understood by the narrative and recommendation tables.
pub const ISSUE_ITC_MISMATCH: &str = "ITC_MISMATCH";
pub const ISSUE_REVERSE_CHARGE_VIOLATION: &str = "REVERSE_CHARGE_VIOLATION";
pub const ISSUE_GSTIN_INVALID: &str = "GSTIN_INVALID";

/// Reference documents bundled as the builtin corpus.
pub const BUILTIN_BOOKS: [&str; 5] = [
    "GST_Act_2017_Complete.pdf",
    "CGST_Rules_2017.pdf",
    "Input_Tax_Credit_Guidelines.pdf",
    "GSTR_Filing_Manual.pdf",
    "Reverse_Charge_Mechanism.pdf",
];
