// ==========================================================================
// ARQUIVO: test_config/mod.rs
// Descrição: Ambiente compartilhado pelos testes do CollateralLoan: dois
//            tokens ERC-20 (garantia e empréstimo), um oráculo e o contrato
//            de empréstimo já inicializados
// ==========================================================================

#![allow(dead_code)]

use multiversx_sc::types::{Address, BigUint, ManagedBuffer};
use multiversx_sc_scenario::{
    managed_address, managed_biguint, rust_biguint,
    testing_framework::{BlockchainStateWrapper, ContractObjWrapper},
    DebugApi,
};

use collateral_loan::ledger::{LedgerEntry, RequestState};
use collateral_loan::CollateralLoan;
use mock_price_feed::MockPriceFeed;
use mock_token::MockToken;

pub const LOAN_WASM_PATH: &str = "output/collateral-loan.wasm";
pub const TOKEN_WASM_PATH: &str = "../mock-token/output/mock-token.wasm";
pub const PRICE_FEED_WASM_PATH: &str = "../mock-price-feed/output/mock-price-feed.wasm";

// Parâmetros do contrato
pub const MONTHLY_RATE: u64 = 1_000; // 1000 => 10%
pub const MIN_REQUEST_AMOUNT: u64 = 1_000;
pub const MONTH_IN_SEC: u64 = 3_600 * 24 * 30;

// Cenário de referência
pub const REQUEST_AMOUNT: u64 = 1_000_000_000_000;
pub const PERIOD: u64 = MONTH_IN_SEC * 6;
pub const CONVERSION_RATE: u64 = 10;
pub const ORACLE_SCALE: u64 = 1_000_000_000_000_000_000; // 18 casas
pub const START_TIMESTAMP: u64 = 1_700_000_000;

// Saldos
pub const TOKEN_SUPPLY: u64 = 1_000_000_000_000_000_000;
pub const PLAYER_FUNDS: u64 = 10_000_000_000_000;
pub const UNLIMITED_ALLOWANCE: u64 = u64::MAX;

/// Valor do aceite no cenário de referência: taxa * garantia.
pub fn reference_total_value() -> u64 {
    CONVERSION_RATE * REQUEST_AMOUNT
}

/// Valores acima de i64::MAX não passam por `managed_biguint!`; monta via u128.
pub fn big_amount(value: u128) -> BigUint<DebugApi> {
    BigUint::from(value)
}

/// Tópico de um inteiro codificado no evento: big-endian sem zeros à esquerda.
pub fn int_topic(value: u128) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let first = bytes.iter().position(|byte| *byte != 0).unwrap_or(bytes.len());
    bytes[first..].to_vec()
}

pub fn address_topic(address: &Address) -> Vec<u8> {
    address.as_bytes().to_vec()
}

/// Tópicos do primeiro log cujo identificador é `identifier`.
pub fn find_event_topics<'a, I>(logs_topics: I, identifier: &str) -> Vec<Vec<u8>>
where
    I: IntoIterator<Item = &'a Vec<Vec<u8>>>,
{
    logs_topics
        .into_iter()
        .find(|topics| topics.first().map(|id| id.as_slice()) == Some(identifier.as_bytes()))
        .cloned()
        .unwrap_or_else(|| panic!("event {} not emitted", identifier))
}

/// Fórmula de juros com meia taxa, calculada em u128.
pub fn expected_interest(principal: u64, elapsed: u64) -> u64 {
    let scaled = principal as u128 * MONTHLY_RATE as u128 * elapsed as u128;
    (scaled / MONTH_IN_SEC as u128 / 10_000 / 2) as u64
}

pub struct LoanSetup<LoanBuilder, TokenBuilder, FeedBuilder>
where
    LoanBuilder: 'static + Copy + Fn() -> collateral_loan::ContractObj<DebugApi>,
    TokenBuilder: 'static + Copy + Fn() -> mock_token::ContractObj<DebugApi>,
    FeedBuilder: 'static + Copy + Fn() -> mock_price_feed::ContractObj<DebugApi>,
{
    pub blockchain_wrapper: BlockchainStateWrapper,
    pub owner_address: Address,
    pub borrower_address: Address,
    pub lender_address: Address,
    pub account3_address: Address,
    pub loan_wrapper: ContractObjWrapper<collateral_loan::ContractObj<DebugApi>, LoanBuilder>,
    pub collateral_token: ContractObjWrapper<mock_token::ContractObj<DebugApi>, TokenBuilder>,
    pub loan_token: ContractObjWrapper<mock_token::ContractObj<DebugApi>, TokenBuilder>,
    pub price_feed: ContractObjWrapper<mock_price_feed::ContractObj<DebugApi>, FeedBuilder>,
}

/// Deploy dos quatro contratos e distribuição de fundos:
/// - tomador recebe PLAYER_FUNDS do token de garantia e aprova o contrato;
/// - credor recebe PLAYER_FUNDS do token emprestado e aprova o contrato;
/// - account3 recebe PLAYER_FUNDS do token emprestado, sem aprovar nada;
/// - oráculo publica CONVERSION_RATE com 18 casas.
pub fn setup_loan<LoanBuilder, TokenBuilder, FeedBuilder>(
    loan_builder: LoanBuilder,
    token_builder: TokenBuilder,
    feed_builder: FeedBuilder,
) -> LoanSetup<LoanBuilder, TokenBuilder, FeedBuilder>
where
    LoanBuilder: 'static + Copy + Fn() -> collateral_loan::ContractObj<DebugApi>,
    TokenBuilder: 'static + Copy + Fn() -> mock_token::ContractObj<DebugApi>,
    FeedBuilder: 'static + Copy + Fn() -> mock_price_feed::ContractObj<DebugApi>,
{
    let rust_zero = rust_biguint!(0u64);
    let mut blockchain_wrapper = BlockchainStateWrapper::new();
    blockchain_wrapper.set_block_timestamp(START_TIMESTAMP);

    let owner_address = blockchain_wrapper.create_user_account(&rust_zero);
    let borrower_address = blockchain_wrapper.create_user_account(&rust_zero);
    let lender_address = blockchain_wrapper.create_user_account(&rust_zero);
    let account3_address = blockchain_wrapper.create_user_account(&rust_zero);

    // Tokens ERC-20
    let collateral_token = blockchain_wrapper.create_sc_account(
        &rust_zero,
        Some(&owner_address),
        token_builder,
        TOKEN_WASM_PATH,
    );
    let loan_token = blockchain_wrapper.create_sc_account(
        &rust_zero,
        Some(&owner_address),
        token_builder,
        TOKEN_WASM_PATH,
    );

    blockchain_wrapper
        .execute_tx(&owner_address, &collateral_token, &rust_zero, |sc| {
            sc.init(
                managed_biguint!(TOKEN_SUPPLY),
                ManagedBuffer::from("TokenA"),
                ManagedBuffer::from("A"),
                18u8,
            );
        })
        .assert_ok();
    blockchain_wrapper
        .execute_tx(&owner_address, &loan_token, &rust_zero, |sc| {
            sc.init(
                managed_biguint!(TOKEN_SUPPLY),
                ManagedBuffer::from("TokenX"),
                ManagedBuffer::from("X"),
                18u8,
            );
        })
        .assert_ok();

    // Oráculo
    let price_feed = blockchain_wrapper.create_sc_account(
        &rust_zero,
        Some(&owner_address),
        feed_builder,
        PRICE_FEED_WASM_PATH,
    );
    blockchain_wrapper
        .execute_tx(&owner_address, &price_feed, &rust_zero, |sc| {
            sc.init();
            sc.set_oracle_parameters(
                big_amount(CONVERSION_RATE as u128 * ORACLE_SCALE as u128),
                18u8,
                START_TIMESTAMP,
            );
        })
        .assert_ok();

    // Contrato de empréstimo
    let loan_wrapper = blockchain_wrapper.create_sc_account(
        &rust_zero,
        Some(&owner_address),
        loan_builder,
        LOAN_WASM_PATH,
    );
    let loan_token_address = loan_token.address_ref().clone();
    let collateral_token_address = collateral_token.address_ref().clone();
    let price_feed_address = price_feed.address_ref().clone();
    blockchain_wrapper
        .execute_tx(&owner_address, &loan_wrapper, &rust_zero, |sc| {
            sc.init(
                managed_address!(&loan_token_address),
                managed_address!(&collateral_token_address),
                managed_address!(&price_feed_address),
                MONTHLY_RATE,
                managed_biguint!(MIN_REQUEST_AMOUNT),
            );
        })
        .assert_ok();

    // Fundos e aprovações
    let loan_contract_address = loan_wrapper.address_ref().clone();
    blockchain_wrapper
        .execute_tx(&owner_address, &collateral_token, &rust_zero, |sc| {
            sc.transfer(managed_address!(&borrower_address), managed_biguint!(PLAYER_FUNDS));
        })
        .assert_ok();
    blockchain_wrapper
        .execute_tx(&owner_address, &loan_token, &rust_zero, |sc| {
            sc.transfer(managed_address!(&lender_address), managed_biguint!(PLAYER_FUNDS));
            sc.transfer(managed_address!(&account3_address), managed_biguint!(PLAYER_FUNDS));
        })
        .assert_ok();
    blockchain_wrapper
        .execute_tx(&borrower_address, &collateral_token, &rust_zero, |sc| {
            sc.approve(
                managed_address!(&loan_contract_address),
                big_amount(UNLIMITED_ALLOWANCE as u128),
            );
        })
        .assert_ok();
    blockchain_wrapper
        .execute_tx(&lender_address, &loan_token, &rust_zero, |sc| {
            sc.approve(
                managed_address!(&loan_contract_address),
                big_amount(UNLIMITED_ALLOWANCE as u128),
            );
        })
        .assert_ok();

    LoanSetup {
        blockchain_wrapper,
        owner_address,
        borrower_address,
        lender_address,
        account3_address,
        loan_wrapper,
        collateral_token,
        loan_token,
        price_feed,
    }
}

impl<LoanBuilder, TokenBuilder, FeedBuilder> LoanSetup<LoanBuilder, TokenBuilder, FeedBuilder>
where
    LoanBuilder: 'static + Copy + Fn() -> collateral_loan::ContractObj<DebugApi>,
    TokenBuilder: 'static + Copy + Fn() -> mock_token::ContractObj<DebugApi>,
    FeedBuilder: 'static + Copy + Fn() -> mock_price_feed::ContractObj<DebugApi>,
{
    pub fn loan_contract_address(&self) -> Address {
        self.loan_wrapper.address_ref().clone()
    }

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.blockchain_wrapper.set_block_timestamp(timestamp);
    }

    pub fn set_conversion_rate(&mut self, value: u64) {
        let owner = self.owner_address.clone();
        self.blockchain_wrapper
            .execute_tx(&owner, &self.price_feed, &rust_biguint!(0), |sc| {
                sc.set_oracle_parameters(big_amount(value as u128), 18u8, START_TIMESTAMP);
            })
            .assert_ok();
    }

    /// Pedido de referência do tomador, no instante atual.
    pub fn place_reference_request(&mut self) {
        let borrower = self.borrower_address.clone();
        self.place_request(&borrower, REQUEST_AMOUNT, PERIOD);
    }

    pub fn place_request(&mut self, borrower: &Address, amount: u64, period: u64) {
        self.blockchain_wrapper
            .execute_tx(borrower, &self.loan_wrapper, &rust_biguint!(0), |sc| {
                sc.place_borrow_request(managed_biguint!(amount), period);
            })
            .assert_ok();
    }

    pub fn accept_request(&mut self, lender: &Address, borrower: &Address) {
        self.blockchain_wrapper
            .execute_tx(lender, &self.loan_wrapper, &rust_biguint!(0), |sc| {
                sc.accept_borrow_request(managed_address!(borrower));
            })
            .assert_ok();
    }

    /// Pedido de referência colocado e aceito pelo credor.
    pub fn accepted_reference_request(&mut self) {
        self.place_reference_request();
        let lender = self.lender_address.clone();
        let borrower = self.borrower_address.clone();
        self.accept_request(&lender, &borrower);
    }

    /// Dá ao endereço tokens do ativo emprestado e aprova o contrato.
    pub fn fund_with_loan_token(&mut self, address: &Address, amount: u64) {
        let owner = self.owner_address.clone();
        let loan_contract = self.loan_contract_address();
        self.blockchain_wrapper
            .execute_tx(&owner, &self.loan_token, &rust_biguint!(0), |sc| {
                sc.transfer(managed_address!(address), managed_biguint!(amount));
            })
            .assert_ok();
        self.blockchain_wrapper
            .execute_tx(address, &self.loan_token, &rust_biguint!(0), |sc| {
                sc.approve(managed_address!(&loan_contract), managed_biguint!(amount));
            })
            .assert_ok();
    }

    /// Dá ao endereço tokens de garantia e aprova o contrato.
    pub fn fund_with_collateral_token(&mut self, address: &Address, amount: u64) {
        let owner = self.owner_address.clone();
        let loan_contract = self.loan_contract_address();
        self.blockchain_wrapper
            .execute_tx(&owner, &self.collateral_token, &rust_biguint!(0), |sc| {
                sc.transfer(managed_address!(address), managed_biguint!(amount));
            })
            .assert_ok();
        self.blockchain_wrapper
            .execute_tx(address, &self.collateral_token, &rust_biguint!(0), |sc| {
                sc.approve(managed_address!(&loan_contract), managed_biguint!(amount));
            })
            .assert_ok();
    }

    pub fn collateral_balance(&mut self, address: &Address) -> u64 {
        let mut balance = 0u64;
        self.blockchain_wrapper
            .execute_query(&self.collateral_token, |sc| {
                balance = sc
                    .balance_of(managed_address!(address))
                    .to_u64()
                    .unwrap();
            })
            .assert_ok();
        balance
    }

    pub fn loan_token_balance(&mut self, address: &Address) -> u64 {
        let mut balance = 0u64;
        self.blockchain_wrapper
            .execute_query(&self.loan_token, |sc| {
                balance = sc
                    .balance_of(managed_address!(address))
                    .to_u64()
                    .unwrap();
            })
            .assert_ok();
        balance
    }

    pub fn request_state(&mut self, borrower: &Address) -> RequestState {
        let mut state = RequestState::NoEntry;
        self.blockchain_wrapper
            .execute_query(&self.loan_wrapper, |sc| {
                state = sc.get_request_state(managed_address!(borrower));
            })
            .assert_ok();
        state
    }

    /// Executa `check` sobre o pedido armazenado; falha se o slot estiver vazio.
    pub fn check_entry<F>(&mut self, borrower: &Address, check: F)
    where
        F: FnOnce(LedgerEntry<DebugApi>),
    {
        self.blockchain_wrapper
            .execute_query(&self.loan_wrapper, |sc| {
                let entry = sc
                    .get_ledger_entry(managed_address!(borrower))
                    .into_option()
                    .expect("ledger entry should exist");
                check(entry);
            })
            .assert_ok();
    }

    pub fn check_no_entry(&mut self, borrower: &Address) {
        self.blockchain_wrapper
            .execute_query(&self.loan_wrapper, |sc| {
                assert!(sc
                    .get_ledger_entry(managed_address!(borrower))
                    .into_option()
                    .is_none());
                assert_eq!(
                    sc.get_request_state(managed_address!(borrower)),
                    RequestState::NoEntry
                );
            })
            .assert_ok();
    }
}
