multiversx_sc::imports!();

use crate::ledger::LedgerEntry;

#[multiversx_sc::module]
pub trait StorageModule {
    // Parâmetros fixados no deploy

    #[view(getCollateralToken)]
    #[storage_mapper("collateral_token")]
    fn collateral_token(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getLoanToken)]
    #[storage_mapper("loan_token")]
    fn loan_token(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getOracle)]
    #[storage_mapper("oracle")]
    fn oracle(&self) -> SingleValueMapper<ManagedAddress>;

    /// Taxa mensal em pontos base (1000 = 10%).
    #[view(getMonthlyRate)]
    #[storage_mapper("monthly_rate")]
    fn monthly_rate(&self) -> SingleValueMapper<u64>;

    #[view(getMinRequestAmount)]
    #[storage_mapper("min_request_amount")]
    fn min_request_amount(&self) -> SingleValueMapper<BigUint>;

    // Estado

    /// No máximo um pedido vivo por tomador; slot vazio = sem pedido.
    #[storage_mapper("ledger")]
    fn ledger(&self, borrower: &ManagedAddress) -> SingleValueMapper<LedgerEntry<Self::Api>>;

    /// Soma acumulada de todas as partes retidas desde o deploy; só cresce.
    /// A parte de cada pedido fica em `LedgerEntry::retained_amount`.
    #[view(getRetainedBuffer)]
    #[storage_mapper("retained_buffer")]
    fn retained_buffer(&self) -> SingleValueMapper<BigUint>;
}
