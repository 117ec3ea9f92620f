extern crate std;

use soroban_sdk::{
    contract, contractimpl, symbol_short,
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

use crate::{Error, ProcurementParams, ProcurementRegistry, ProcurementRegistryClient};

/// Balance minted to the default creator; covers many default fees.
pub const CREATOR_FUNDS: i128 = 1_000_000;

/// Stand-in for the external authority-verification contract.
#[contract]
pub struct MockVerifier;

#[contractimpl]
impl MockVerifier {
    pub fn verify(env: Env, principal: Address) {
        env.storage().instance().set(&principal, &true);
    }

    pub fn revoke(env: Env, principal: Address) {
        env.storage().instance().remove(&principal);
    }

    pub fn is_verified_authority(env: Env, principal: Address) -> bool {
        env.storage().instance().get(&principal).unwrap_or(false)
    }
}

pub struct Setup {
    pub env: Env,
    pub client: ProcurementRegistryClient<'static>,
    pub verifier: MockVerifierClient<'static>,
    pub token: token::Client<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub admin: Address,
    /// Verified authority holding [`CREATOR_FUNDS`].
    pub creator: Address,
    /// Fee recipient used by [`setup_with_authority`].
    pub authority: Address,
}

/// Registry initialised at ledger 0, no authority contract configured yet.
pub fn setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_sequence_number(0);

    let admin = Address::generate(&env);
    let creator = Address::generate(&env);
    let authority = Address::generate(&env);

    let verifier_id = env.register(MockVerifier, ());
    let verifier = MockVerifierClient::new(&env, &verifier_id);
    verifier.verify(&creator);

    let issuer = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(issuer);
    let token = token::Client::new(&env, &sac.address());
    let token_admin = token::StellarAssetClient::new(&env, &sac.address());
    token_admin.mint(&creator, &CREATOR_FUNDS);

    let contract_id = env.register(ProcurementRegistry, ());
    let client = ProcurementRegistryClient::new(&env, &contract_id);
    client.init(&admin, &verifier_id, &sac.address());

    Setup {
        env,
        client,
        verifier,
        token,
        token_admin,
        admin,
        creator,
        authority,
    }
}

/// [`setup`] plus `authority` configured as the fee recipient.
pub fn setup_with_authority() -> Setup {
    let s = setup();
    s.client.set_authority_contract(&s.admin, &s.authority);
    s
}

pub fn text(env: &Env, value: &str) -> String {
    String::from_str(env, value)
}

/// `len` copies of `a`.
pub fn text_of_len(env: &Env, len: usize) -> String {
    repeated(env, "a", len)
}

/// `count` copies of `unit`.
pub fn repeated(env: &Env, unit: &str, count: usize) -> String {
    String::from_str(env, &unit.repeat(count))
}

/// A request that passes every validation rule at ledger 0.
pub fn valid_params(env: &Env, title: &str) -> ProcurementParams {
    ProcurementParams {
        title: text(env, title),
        description: text(env, "Description1"),
        budget: 1000,
        deadline: 100,
        start_date: 50,
        eval_criteria: text(env, "Criteria1"),
        procurement_type: symbol_short!("goods"),
        location: text(env, "Location1"),
        currency: symbol_short!("STX"),
        min_bid: 500,
        max_bid: 1500,
        department: text(env, "Dept1"),
        category: text(env, "Cat1"),
        quantity: 10,
        unit: text(env, "units"),
        delivery_time: 30,
        payment_terms: text(env, "Terms1"),
        warranty_period: 12,
    }
}

/// Second valid request, different in every field.
pub fn other_params(env: &Env, title: &str) -> ProcurementParams {
    ProcurementParams {
        title: text(env, title),
        description: text(env, "Description2"),
        budget: 2000,
        deadline: 200,
        start_date: 100,
        eval_criteria: text(env, "Criteria2"),
        procurement_type: symbol_short!("services"),
        location: text(env, "Location2"),
        currency: symbol_short!("USD"),
        min_bid: 1000,
        max_bid: 3000,
        department: text(env, "Dept2"),
        category: text(env, "Cat2"),
        quantity: 20,
        unit: text(env, "pieces"),
        delivery_time: 60,
        payment_terms: text(env, "Terms2"),
        warranty_period: 24,
    }
}

impl Setup {
    pub fn create(&self, params: &ProcurementParams) -> u64 {
        self.client.create_procurement(&self.creator, params)
    }

    /// Expect `create_procurement` by `caller` to fail and return the error.
    pub fn create_err_as(&self, caller: &Address, params: &ProcurementParams) -> Error {
        match self.client.try_create_procurement(caller, params) {
            Err(Ok(err)) => err,
            other => panic!("expected contract error, got {:?}", other),
        }
    }

    pub fn create_err(&self, params: &ProcurementParams) -> Error {
        self.create_err_as(&self.creator, params)
    }

    pub fn set_ledger(&self, sequence: u32) {
        self.env.ledger().set_sequence_number(sequence);
    }
}
