// ==========================================================================
// MÓDULO: collateral-loan/src/accrual.rs
// Descrição: Cálculo de juros proporcionais ao tempo e avaliação da garantia
//            a partir da cotação do oráculo
// ==========================================================================

multiversx_sc::imports!();

use common_types::ORACLE_SCALE;

/// Duração de um mês comercial (30 dias) em segundos.
pub const MONTH_IN_SECONDS: u64 = 30 * 24 * 60 * 60;

/// Denominador das taxas em pontos base (10000 = 100%).
pub const RATE_DENOMINATOR: u64 = 10_000;

/// Apenas metade da taxa nominal corre como juros: a outra metade do valor
/// já foi adiantada ao tomador no aceite.
pub const HALF_RATE_DIVISOR: u64 = 2;

/// Juros acumulados sobre `principal` durante `elapsed` segundos.
///
/// `principal * rate_bps * elapsed / MONTH_IN_SECONDS / RATE_DENOMINATOR / 2`,
/// cada divisão truncada. O produto é feito em `BigUint`, sem risco de
/// overflow mesmo para supplies na ordem de 10^25.
pub fn accrued_interest<M: ManagedTypeApi>(
    principal: &BigUint<M>,
    monthly_rate_bps: u64,
    elapsed: u64,
) -> BigUint<M> {
    let scaled = principal * &BigUint::from(monthly_rate_bps) * &BigUint::from(elapsed);

    scaled
        / &BigUint::from(MONTH_IN_SECONDS)
        / &BigUint::from(RATE_DENOMINATOR)
        / &BigUint::from(HALF_RATE_DIVISOR)
}

/// Valor total da garantia em unidades do ativo emprestado.
///
/// A cotação é sempre interpretada com 18 casas decimais; as casas informadas
/// pelo oráculo não são consultadas.
pub fn collateral_value<M: ManagedTypeApi>(
    rate_value: &BigUint<M>,
    collateral_amount: &BigUint<M>,
) -> BigUint<M> {
    rate_value * collateral_amount / &BigUint::from(ORACLE_SCALE)
}

/// Divide o valor do aceite em (parte adiantada ao tomador, parte retida).
/// Para valores ímpares a unidade restante fica retida.
pub fn split_acceptance<M: ManagedTypeApi>(total_value: &BigUint<M>) -> (BigUint<M>, BigUint<M>) {
    let advanced = total_value / &BigUint::from(2u64);
    let retained = total_value - &advanced;
    (advanced, retained)
}
