#![no_std]
// Token fungível no padrão ERC-20 usado como ativo de garantia e como ativo
// emprestado nos testes do contrato de empréstimo.

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Informações básicas do token
/// - name: Nome do token
/// - ticker: Símbolo do token
/// - decimals: Número de casas decimais
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct TokenInfo<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub ticker: ManagedBuffer<M>,
    pub decimals: u8,
}

#[multiversx_sc::contract]
pub trait MockToken {
    /// Todo o suprimento inicial é criado para quem faz o deploy.
    #[init]
    fn init(
        &self,
        initial_supply: BigUint,
        token_name: ManagedBuffer,
        token_ticker: ManagedBuffer,
        token_decimals: u8,
    ) {
        self.token_info().set(TokenInfo {
            name: token_name,
            ticker: token_ticker,
            decimals: token_decimals,
        });

        let caller = self.blockchain().get_caller();
        self.mint(&caller, &initial_supply);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ======== FUNÇÕES DE VISUALIZAÇÃO (VIEW) ========

    #[view(getName)]
    fn get_name(&self) -> ManagedBuffer {
        self.token_info().get().name
    }

    #[view(getTicker)]
    fn get_ticker(&self) -> ManagedBuffer {
        self.token_info().get().ticker
    }

    #[view(getDecimals)]
    fn get_decimals(&self) -> u8 {
        self.token_info().get().decimals
    }

    #[view(totalSupply)]
    fn total_supply(&self) -> BigUint {
        self.total_token_supply().get()
    }

    #[view(balanceOf)]
    fn balance_of(&self, address: ManagedAddress) -> BigUint {
        self.balances(&address).get()
    }

    /// Quanto `spender` ainda pode movimentar em nome de `owner`.
    #[view(allowance)]
    fn allowance(&self, owner: ManagedAddress, spender: ManagedAddress) -> BigUint {
        self.allowances(&owner, &spender).get()
    }

    // ======== FUNÇÕES ERC-20 ========

    #[endpoint]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.perform_transfer(&caller, &to, &amount);
    }

    /// Substitui a allowance anterior de `spender`.
    #[endpoint]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowances(&caller, &spender).set(&amount);
        self.approve_event(&caller, &spender, &amount);
    }

    /// Transfere em nome de `from`, consumindo a allowance concedida ao caller.
    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();

        let allowance = self.allowances(&from, &caller).get();
        require!(allowance >= amount, "insufficient allowance");
        self.allowances(&from, &caller).set(&(&allowance - &amount));

        self.perform_transfer(&from, &to, &amount);
    }

    #[endpoint(mint)]
    fn mint_endpoint(&self, to: ManagedAddress, amount: BigUint) {
        self.blockchain().check_caller_is_owner();

        self.mint(&to, &amount);
    }

    // ======== FUNÇÕES INTERNAS ========

    fn mint(&self, to: &ManagedAddress, amount: &BigUint) {
        if amount == &BigUint::zero() {
            return;
        }

        self.balances(to).update(|balance| *balance += amount);
        self.total_token_supply().update(|supply| *supply += amount);

        self.mint_event(to, amount);
    }

    fn perform_transfer(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let balance = self.balances(from).get();
        require!(&balance >= amount, "insufficient balance");

        self.balances(from).set(&(&balance - amount));
        self.balances(to).update(|to_balance| *to_balance += amount);

        self.transfer_event(from, to, amount);
    }

    // ======== EVENTOS ========

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("approve")]
    fn approve_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("mint")]
    fn mint_event(&self, #[indexed] to: &ManagedAddress, #[indexed] amount: &BigUint);

    // ======== STORAGE ========

    #[storage_mapper("token_info")]
    fn token_info(&self) -> SingleValueMapper<TokenInfo<Self::Api>>;

    #[storage_mapper("total_supply")]
    fn total_token_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balances")]
    fn balances(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowances")]
    fn allowances(&self, owner: &ManagedAddress, spender: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
