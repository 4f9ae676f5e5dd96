use multiversx_sc::proxy_imports::*;

/// Call interface of the external Zombie Bird collection contract.
pub struct ZombieBirdProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ZombieBirdProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ZombieBirdProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ZombieBirdProxyMethods { wrapped_tx: tx }
    }
}

pub struct ZombieBirdProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> ZombieBirdProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Mints `qty` zombie birds to `to`. Returns `false` when the collection refuses the mint.
    pub fn mint<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<u64>>(
        self,
        to: Arg0,
        qty: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("mint")
            .argument(&to)
            .argument(&qty)
            .original_result()
    }
}
