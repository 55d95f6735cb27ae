/// Use cases module containing application business logic orchestration
mod generate_quote;

pub use generate_quote::GenerateQuoteUseCase;
