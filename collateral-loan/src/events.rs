multiversx_sc::imports!();

/// Eventos emitidos a cada transição de estado de um pedido.
#[multiversx_sc::module]
pub trait EventsModule {
    #[event("placedRequest")]
    fn placed_request_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] timestamp: u64,
    );

    #[event("retiredRequest")]
    fn retired_request_event(&self, #[indexed] borrower: &ManagedAddress, #[indexed] timestamp: u64);

    #[event("acceptRequest")]
    fn accept_request_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] lender: &ManagedAddress,
        #[indexed] total_value: &BigUint,
        #[indexed] timestamp: u64,
    );

    #[event("interestPaid")]
    fn interest_paid_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] interest: &BigUint,
        #[indexed] timestamp: u64,
    );

    #[event("resolveRequestEnoughFunds")]
    fn resolve_enough_funds_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] lender: &ManagedAddress,
        #[indexed] owed: &BigUint,
        #[indexed] collateral_amount: &BigUint,
        #[indexed] timestamp: u64,
    );

    /// `owed` é o valor calculado mas não cobrado; fica registrado para a
    /// contabilidade fora da cadeia.
    #[event("resolveRequestNotEnoughFunds")]
    fn resolve_not_enough_funds_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] lender: &ManagedAddress,
        #[indexed] owed: &BigUint,
        #[indexed] collateral_amount: &BigUint,
        #[indexed] timestamp: u64,
    );
}
