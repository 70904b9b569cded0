// ==========================================================================
// MÓDULO: collateral-loan/src/collateral_loan.rs
// Descrição: Contrato de empréstimo P2P com garantia. O tomador deposita a
//            garantia, um credor aceita o pedido com base na cotação do
//            oráculo e, no vencimento, o pedido é quitado ou a garantia é
//            executada em favor do credor.
// ==========================================================================

#![no_std]

multiversx_sc::imports!();

pub mod accrual;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod proxies;
pub mod storage;

use errors::*;
use ledger::{LedgerEntry, Request, RequestState};

#[multiversx_sc::contract]
pub trait CollateralLoan:
    storage::StorageModule + events::EventsModule + proxies::ProxyModule
{
    /// Parâmetros são fixos: não existem endpoints para alterá-los depois.
    #[init]
    fn init(
        &self,
        loan_token: ManagedAddress,       // Ativo emprestado pelo credor
        collateral_token: ManagedAddress, // Ativo depositado como garantia
        oracle: ManagedAddress,           // Cotação garantia -> ativo emprestado
        monthly_rate: u64,                // Pontos base por mês (1000 = 10%)
        min_request_amount: BigUint,      // Menor garantia aceita num pedido
    ) {
        require!(!loan_token.is_zero(), ERROR_INVALID_ADDRESS);
        require!(!collateral_token.is_zero(), ERROR_INVALID_ADDRESS);
        require!(!oracle.is_zero(), ERROR_INVALID_ADDRESS);
        require!(monthly_rate > 0, ERROR_ZERO_RATE);
        require!(min_request_amount > BigUint::zero(), ERROR_ZERO_MIN_REQUEST);

        self.loan_token().set(loan_token);
        self.collateral_token().set(collateral_token);
        self.oracle().set(oracle);
        self.monthly_rate().set(monthly_rate);
        self.min_request_amount().set(min_request_amount);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ======== CICLO DE VIDA DO PEDIDO ========

    /// Cria o pedido do caller e deposita `amount` da garantia em custódia.
    /// O caller precisa ter dado `approve` ao contrato no token de garantia.
    #[endpoint(placeBorrowRequest)]
    fn place_borrow_request(&self, amount: BigUint, period: u64) {
        require!(amount >= self.min_request_amount().get(), ERROR_LOW_REQUEST_AMOUNT);

        let borrower = self.blockchain().get_caller();
        require!(
            self.load_request(&borrower).state() == RequestState::NoEntry,
            ERROR_DUPLICATE_REQUEST
        );

        let now = self.blockchain().get_block_timestamp();
        self.ledger(&borrower)
            .set(LedgerEntry::open(amount.clone(), period, now));

        let custody = self.blockchain().get_sc_address();
        self.token_transfer_from(self.collateral_token().get(), &borrower, &custody, &amount);

        self.placed_request_event(&borrower, &amount, now);
    }

    /// Cancela um pedido ainda não aceito e devolve a garantia.
    #[endpoint(retireRequest)]
    fn retire_request(&self) {
        let borrower = self.blockchain().get_caller();
        let entry = self.require_open(&borrower);

        self.ledger(&borrower).clear();

        self.token_transfer(
            self.collateral_token().get(),
            &borrower,
            &entry.collateral_amount,
        );

        let now = self.blockchain().get_block_timestamp();
        self.retired_request_event(&borrower, now);
    }

    /// O caller assume o papel de credor do pedido de `borrower`.
    ///
    /// O valor da garantia segundo o oráculo é retirado do credor; metade vai
    /// direto para o tomador e a outra metade fica retida no contrato.
    #[endpoint(acceptBorrowRequest)]
    fn accept_borrow_request(&self, borrower: ManagedAddress) {
        let mut entry = self.require_open(&borrower);
        let lender = self.blockchain().get_caller();

        let rate = self.latest_rate(self.oracle().get());
        let total_value = accrual::collateral_value(&rate.value, &entry.collateral_amount);
        require!(total_value > BigUint::zero(), ERROR_ZERO_VALUATION);

        let (advanced, retained) = accrual::split_acceptance(&total_value);

        let now = self.blockchain().get_block_timestamp();
        entry.lender = Some(lender.clone());
        entry.loan_principal = total_value.clone();
        entry.retained_amount = retained.clone();
        entry.checkpoint = now;
        self.ledger(&borrower).set(&entry);
        self.retained_buffer().update(|buffer| *buffer += &retained);

        let loan_token = self.loan_token().get();
        let custody = self.blockchain().get_sc_address();
        self.token_transfer_from(loan_token.clone(), &lender, &custody, &total_value);
        self.token_transfer(loan_token, &borrower, &advanced);

        self.accept_request_event(&borrower, &lender, &total_value, now);
    }

    /// Paga ao credor os juros acumulados desde o último checkpoint.
    /// O checkpoint volta para agora, o que também adia o vencimento.
    #[endpoint(payCurrentInterest)]
    fn pay_current_interest(&self) {
        let borrower = self.blockchain().get_caller();
        let (mut entry, lender) = self.require_accepted(&borrower);

        let now = self.blockchain().get_block_timestamp();
        let interest_due = accrual::accrued_interest(
            &entry.loan_principal,
            self.monthly_rate().get(),
            entry.elapsed_since_checkpoint(now),
        );

        entry.checkpoint = now;
        self.ledger(&borrower).set(&entry);

        if interest_due > BigUint::zero() {
            self.token_transfer_from(self.loan_token().get(), &borrower, &lender, &interest_due);
        }

        self.interest_paid_event(&borrower, &interest_due, now);
    }

    /// Liquida um pedido vencido. Qualquer endereço pode chamar.
    ///
    /// Se o tomador tiver saldo e allowance para o principal mais os juros do
    /// período inteiro, o credor recebe esse valor e o tomador recupera a
    /// garantia. Caso contrário a garantia vai para o credor.
    #[endpoint(resolveRequest)]
    fn resolve_request(&self, borrower: ManagedAddress) {
        let (entry, lender) = self.require_accepted(&borrower);

        let now = self.blockchain().get_block_timestamp();
        require!(entry.is_matured(now), ERROR_REQUEST_NOT_FINALIZED);

        let owed = self.settlement_amount(&entry);
        let loan_token = self.loan_token().get();
        let can_repay = self.can_collect(&loan_token, &borrower, &owed);

        self.ledger(&borrower).clear();

        let collateral_token = self.collateral_token().get();
        if can_repay {
            self.token_transfer_from(loan_token, &borrower, &lender, &owed);
            self.token_transfer(collateral_token, &borrower, &entry.collateral_amount);

            self.resolve_enough_funds_event(
                &borrower,
                &lender,
                &owed,
                &entry.collateral_amount,
                now,
            );
        } else {
            self.token_transfer(collateral_token, &lender, &entry.collateral_amount);

            self.resolve_not_enough_funds_event(
                &borrower,
                &lender,
                &owed,
                &entry.collateral_amount,
                now,
            );
        }
    }

    // ======== CONSULTAS ========

    #[view(getLedgerEntry)]
    fn get_ledger_entry(&self, borrower: ManagedAddress) -> OptionalValue<LedgerEntry<Self::Api>> {
        match self.ledger_slot(&borrower) {
            Some(entry) => OptionalValue::Some(entry),
            None => OptionalValue::None,
        }
    }

    #[view(getRequestState)]
    fn get_request_state(&self, borrower: ManagedAddress) -> RequestState {
        self.load_request(&borrower).state()
    }

    /// Juros acumulados até agora; zero se o pedido não foi aceito.
    #[view(getInterestDue)]
    fn get_interest_due(&self, borrower: ManagedAddress) -> BigUint {
        match self.load_request(&borrower) {
            Request::Accepted { entry, .. } => {
                let now = self.blockchain().get_block_timestamp();
                accrual::accrued_interest(
                    &entry.loan_principal,
                    self.monthly_rate().get(),
                    entry.elapsed_since_checkpoint(now),
                )
            },
            _ => BigUint::zero(),
        }
    }

    /// Valor cobrado do tomador na liquidação: principal + juros do período.
    #[view(getAmountOwed)]
    fn get_amount_owed(&self, borrower: ManagedAddress) -> BigUint {
        match self.load_request(&borrower) {
            Request::Accepted { entry, .. } => self.settlement_amount(&entry),
            _ => BigUint::zero(),
        }
    }

    #[view(getMaturity)]
    fn get_maturity(&self, borrower: ManagedAddress) -> u64 {
        match self.load_request(&borrower) {
            Request::NoEntry => 0,
            Request::Open(entry) | Request::Accepted { entry, .. } => entry.maturity(),
        }
    }

    #[view(calculateInterest)]
    fn calculate_interest(&self, principal: BigUint, elapsed: u64) -> BigUint {
        accrual::accrued_interest(&principal, self.monthly_rate().get(), elapsed)
    }

    // ======== FUNÇÕES INTERNAS ========

    /// Slot vazio = sem pedido.
    fn ledger_slot(&self, borrower: &ManagedAddress) -> Option<LedgerEntry<Self::Api>> {
        let mapper = self.ledger(borrower);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    fn load_request(&self, borrower: &ManagedAddress) -> Request<Self::Api> {
        Request::from_slot(self.ledger_slot(borrower))
    }

    fn require_open(&self, borrower: &ManagedAddress) -> LedgerEntry<Self::Api> {
        match self.load_request(borrower) {
            Request::NoEntry => sc_panic!(ERROR_REQUEST_NOT_FOUND),
            Request::Accepted { .. } => sc_panic!(ERROR_ALREADY_ACCEPTED),
            Request::Open(entry) => entry,
        }
    }

    fn require_accepted(
        &self,
        borrower: &ManagedAddress,
    ) -> (LedgerEntry<Self::Api>, ManagedAddress) {
        match self.load_request(borrower) {
            Request::NoEntry => sc_panic!(ERROR_REQUEST_NOT_FOUND),
            Request::Open(_) => sc_panic!(ERROR_REQUEST_NOT_ACCEPTED),
            Request::Accepted { entry, lender } => (entry, lender),
        }
    }

    fn settlement_amount(&self, entry: &LedgerEntry<Self::Api>) -> BigUint {
        let interest = accrual::accrued_interest(
            &entry.loan_principal,
            self.monthly_rate().get(),
            entry.period,
        );
        &entry.loan_principal + &interest
    }

    /// Verifica antes de qualquer transferência se o `transferFrom` do valor
    /// devido passaria; o token reverteria a transação inteira caso contrário.
    fn can_collect(&self, loan_token: &ManagedAddress, borrower: &ManagedAddress, owed: &BigUint) -> bool {
        let balance = self.token_balance(loan_token.clone(), borrower);
        if &balance < owed {
            return false;
        }

        let allowance = self.token_allowance(loan_token.clone(), borrower);
        &allowance >= owed
    }
}
