// ==========================================================================
// MÓDULO: mock-price-feed/src/mock_price_feed.rs
// Descrição: Oráculo de preço com cotação definida manualmente pelo owner,
//            usado nos testes do contrato de empréstimo
// ==========================================================================

#![no_std]
multiversx_sc::imports!();

use common_types::{RateSnapshot, ORACLE_DECIMALS};

#[multiversx_sc::contract]
pub trait MockPriceFeed {
    // Começa sem cotação: valor zero com a escala padrão de 18 casas
    #[init]
    fn init(&self) {
        self.latest_value().set(BigUint::zero());
        self.latest_decimals().set(ORACLE_DECIMALS);
        self.latest_updated_at().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // Publica uma nova cotação (somente owner)
    #[endpoint(setOracleParameters)]
    fn set_oracle_parameters(&self, value: BigUint, decimals: u8, updated_at: u64) {
        self.blockchain().check_caller_is_owner();

        self.latest_value().set(&value);
        self.latest_decimals().set(decimals);
        self.latest_updated_at().set(updated_at);

        self.rate_updated_event(&value, decimals, updated_at);
    }

    // Última cotação publicada; o consumidor decide se ela ainda é válida
    #[view(latestRate)]
    fn latest_rate(&self) -> RateSnapshot<Self::Api> {
        RateSnapshot::new(
            self.latest_value().get(),
            self.latest_decimals().get(),
            self.latest_updated_at().get(),
        )
    }

    #[event("rate_updated")]
    fn rate_updated_event(
        &self,
        #[indexed] value: &BigUint,
        #[indexed] decimals: u8,
        #[indexed] updated_at: u64,
    );

    // --- Storage mappers ---
    #[storage_mapper("latest_value")]
    fn latest_value(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("latest_decimals")]
    fn latest_decimals(&self) -> SingleValueMapper<u8>;

    #[storage_mapper("latest_updated_at")]
    fn latest_updated_at(&self) -> SingleValueMapper<u64>;
}
