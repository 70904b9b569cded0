#![no_std]

// Tipos compartilhados entre o contrato de empréstimo e os contratos externos
// que ele consome (oráculo de preço).

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Escala fixa assumida para o valor devolvido pelo oráculo (18 casas).
pub const ORACLE_DECIMALS: u8 = 18;
pub const ORACLE_SCALE: u64 = 1_000_000_000_000_000_000;

/// Última cotação publicada pelo oráculo.
///
/// `value` expressa o valor de uma unidade do ativo de garantia em unidades
/// do ativo emprestado, em ponto fixo com `decimals` casas.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct RateSnapshot<M: ManagedTypeApi> {
    pub value: BigUint<M>,
    pub decimals: u8,
    pub updated_at: u64,
}

impl<M: ManagedTypeApi> RateSnapshot<M> {
    pub fn new(value: BigUint<M>, decimals: u8, updated_at: u64) -> Self {
        RateSnapshot {
            value,
            decimals,
            updated_at,
        }
    }
}
