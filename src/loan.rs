use crate::decimal::Money;

/// state of a loan at the start or end of a day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    /// unpaid principal balance
    balance: Money,
    /// interest accrued since the last capitalization
    interest: Money,
}

impl Loan {
    /// create a loan with the given principal and no accrued interest
    pub fn new(principal: Money) -> Self {
        Self {
            balance: principal,
            interest: Money::zero(),
        }
    }

    pub fn with_interest(balance: Money, interest: Money) -> Self {
        Self { balance, interest }
    }

    pub fn balance(&self) -> &Money {
        &self.balance
    }

    pub fn interest(&self) -> &Money {
        &self.interest
    }

    /// fold accrued interest into the balance
    pub fn capitalized(&self) -> Loan {
        Loan {
            balance: self.balance.clone() + self.interest.clone(),
            interest: Money::zero(),
        }
    }
}
