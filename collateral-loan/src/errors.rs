pub const ERROR_LOW_REQUEST_AMOUNT: &str = "Low request amount";
pub const ERROR_DUPLICATE_REQUEST: &str = "Multiple requests";
pub const ERROR_REQUEST_NOT_FOUND: &str = "Request does not exist";
pub const ERROR_ALREADY_ACCEPTED: &str = "Request already accepted";
pub const ERROR_REQUEST_NOT_ACCEPTED: &str = "Request not accepted";
pub const ERROR_REQUEST_NOT_FINALIZED: &str = "Request not finalized";
pub const ERROR_ZERO_VALUATION: &str = "Collateral valuation is zero";

// Validação dos parâmetros de inicialização
pub const ERROR_ZERO_RATE: &str = "Monthly rate must be positive";
pub const ERROR_ZERO_MIN_REQUEST: &str = "Minimum request amount must be positive";
pub const ERROR_INVALID_ADDRESS: &str = "Address cannot be zero";
