// ==========================================================================
// MÓDULO: collateral-loan/src/ledger.rs
// Descrição: Registro de pedidos por tomador e os estados do ciclo de vida
// ==========================================================================

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Estado observável do pedido de um tomador.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RequestState {
    NoEntry,
    Open,
    Accepted,
}

/// Pedido de empréstimo de um tomador.
///
/// `retained_amount` é a parte do valor do aceite que ficou em custódia para
/// este pedido; zero enquanto aberto.
///
/// `checkpoint` é o instante da criação enquanto o pedido está aberto e o
/// instante do último acerto de juros depois do aceite. Vencimento e juros
/// são sempre medidos a partir dele.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct LedgerEntry<M: ManagedTypeApi> {
    pub collateral_amount: BigUint<M>,
    pub loan_principal: BigUint<M>,
    pub retained_amount: BigUint<M>,
    pub lender: Option<ManagedAddress<M>>,
    pub period: u64,
    pub checkpoint: u64,
}

impl<M: ManagedTypeApi> LedgerEntry<M> {
    pub fn open(collateral_amount: BigUint<M>, period: u64, now: u64) -> Self {
        LedgerEntry {
            collateral_amount,
            loan_principal: BigUint::zero(),
            retained_amount: BigUint::zero(),
            lender: None,
            period,
            checkpoint: now,
        }
    }

    pub fn state(&self) -> RequestState {
        if self.lender.is_some() {
            RequestState::Accepted
        } else {
            RequestState::Open
        }
    }

    pub fn maturity(&self) -> u64 {
        self.checkpoint.saturating_add(self.period)
    }

    pub fn is_matured(&self, now: u64) -> bool {
        now >= self.maturity()
    }

    pub fn elapsed_since_checkpoint(&self, now: u64) -> u64 {
        now.saturating_sub(self.checkpoint)
    }
}

/// Pedido já separado por estado, usado internamente pelos endpoints.
pub enum Request<M: ManagedTypeApi> {
    NoEntry,
    Open(LedgerEntry<M>),
    Accepted {
        entry: LedgerEntry<M>,
        lender: ManagedAddress<M>,
    },
}

impl<M: ManagedTypeApi> Request<M> {
    pub fn from_slot(slot: Option<LedgerEntry<M>>) -> Self {
        match slot {
            None => Request::NoEntry,
            Some(entry) => match entry.lender.clone() {
                None => Request::Open(entry),
                Some(lender) => Request::Accepted { entry, lender },
            },
        }
    }

    pub fn state(&self) -> RequestState {
        match self {
            Request::NoEntry => RequestState::NoEntry,
            Request::Open(_) => RequestState::Open,
            Request::Accepted { .. } => RequestState::Accepted,
        }
    }
}
