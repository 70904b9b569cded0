// ==========================================================================
// MÓDULO: collateral-loan/src/proxies.rs
// Descrição: Interfaces dos contratos externos consumidos pelo motor de
//            empréstimo (token fungível no padrão ERC-20 e oráculo de preço)
// ==========================================================================

multiversx_sc::imports!();

use common_types::RateSnapshot;

pub mod fungible_token_proxy {
    multiversx_sc::imports!();

    #[multiversx_sc::proxy]
    pub trait FungibleToken {
        #[view(balanceOf)]
        fn balance_of(&self, address: ManagedAddress) -> BigUint;

        #[view(allowance)]
        fn allowance(&self, owner: ManagedAddress, spender: ManagedAddress) -> BigUint;

        #[endpoint]
        fn transfer(&self, to: ManagedAddress, amount: BigUint);

        #[endpoint(transferFrom)]
        fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint);
    }
}

pub mod price_feed_proxy {
    multiversx_sc::imports!();

    use common_types::RateSnapshot;

    #[multiversx_sc::proxy]
    pub trait PriceFeed {
        #[view(latestRate)]
        fn latest_rate(&self) -> RateSnapshot<Self::Api>;
    }
}

/// Chamadas síncronas aos contratos externos. Falhas do token (saldo ou
/// allowance insuficientes) revertem a transação inteira.
#[multiversx_sc::module]
pub trait ProxyModule {
    fn latest_rate(&self, oracle: ManagedAddress) -> RateSnapshot<Self::Api> {
        self.price_feed_proxy(oracle)
            .latest_rate()
            .execute_on_dest_context::<RateSnapshot<Self::Api>>()
    }

    fn token_balance(&self, token: ManagedAddress, owner: &ManagedAddress) -> BigUint {
        self.fungible_token_proxy(token)
            .balance_of(owner.clone())
            .execute_on_dest_context::<BigUint>()
    }

    fn token_allowance(&self, token: ManagedAddress, owner: &ManagedAddress) -> BigUint {
        let spender = self.blockchain().get_sc_address();
        self.fungible_token_proxy(token)
            .allowance(owner.clone(), spender)
            .execute_on_dest_context::<BigUint>()
    }

    /// Envia `amount` da custódia do contrato para `to`.
    fn token_transfer(&self, token: ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        self.fungible_token_proxy(token)
            .transfer(to.clone(), amount.clone())
            .execute_on_dest_context::<()>();
    }

    /// Move `amount` de `from` para `to` usando a allowance concedida ao contrato.
    fn token_transfer_from(
        &self,
        token: ManagedAddress,
        from: &ManagedAddress,
        to: &ManagedAddress,
        amount: &BigUint,
    ) {
        self.fungible_token_proxy(token)
            .transfer_from(from.clone(), to.clone(), amount.clone())
            .execute_on_dest_context::<()>();
    }

    #[proxy]
    fn fungible_token_proxy(&self, address: ManagedAddress) -> fungible_token_proxy::Proxy<Self::Api>;

    #[proxy]
    fn price_feed_proxy(&self, address: ManagedAddress) -> price_feed_proxy::Proxy<Self::Api>;
}
