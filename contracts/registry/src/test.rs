mod tests {
    use crate::contract::{execute, instantiate, query};
    use crate::entry;
    use crate::error::ContractError;
    use crate::handler::activation_cost;
    use crate::state::{Config, CommitEntry};
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info, MockStorage};
    use cosmwasm_std::{
        from_binary, to_binary, Addr, Binary, BlockInfo, CosmosMsg, Response, Timestamp, Uint128,
        WasmMsg,
    };
    use cw20::Cw20ExecuteMsg;
    use k256::ecdsa::SigningKey;
    use proptest::prelude::*;
    use vanity::context::CallContext;
    use vanity::eip712::VanityRecord;
    use vanity::registry::{
        ActivationCostResponse, AdminResponse, CommitmentResponse, ConfigResponse,
        DomainOwnershipResponse, DomainSeparatorResponse, ExecuteMsg, FeeRatioResponse,
        GraceBlocksResponse, InstantiateMsg, QueryMsg, RecordHashResponse, RegisterResponse,
        RegistrationOutcome, EVENT_ACTIVATED, EVENT_CLAIMED, EVENT_HASH_COMMITTED,
        EVENT_REGISTERED,
    };
    use vanity::signer::VanitySigner;
    use vanity::VanityError;

    const CHAIN_ID: u64 = 31337;
    const GENESIS_TIME: u64 = 1_600_000_000;
    const REGISTRY: &str = "0x5fbdb2315678afecb367f032d93f642f64180aa3";
    const ADMIN: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";
    const ALICE: &str = "0x1a642f0e3c3af545e7acbd38b07251b3990914f1";
    const BOB: &str = "0x5050a4f4b3f9338c3472dcc01a87c76a144b3c9c";
    const TOKEN: &str = "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512";
    const FEE_POOL: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";
    const GWEI: u128 = 1_000_000_000;
    const TOKEN_UNIT: u128 = 1_000_000_000_000_000_000;

    fn alice_key() -> SigningKey {
        SigningKey::from_slice(&[1u8; 32]).unwrap()
    }

    fn bob_key() -> SigningKey {
        SigningKey::from_slice(&[2u8; 32]).unwrap()
    }

    fn ctx_at(caller: &str, height: u64, sequence: u64) -> CallContext {
        CallContext {
            caller: Addr::unchecked(caller),
            block: BlockInfo {
                height,
                time: Timestamp::from_seconds(GENESIS_TIME + height),
                chain_id: CHAIN_ID.to_string(),
            },
            contract: Addr::unchecked(REGISTRY),
            gas_price: Uint128::new(GWEI),
            sequence,
        }
    }

    fn default_instantiate_msg() -> InstantiateMsg {
        InstantiateMsg {
            chain_id: CHAIN_ID,
            accepted_token: Some(String::from(TOKEN)),
            fee_pool: None,
            max_allowed_gas_price: None,
            commit_grace_blocks: None,
            activation_grace_blocks: None,
            cost_per_character: None,
            fee_ratio: None,
            max_expiration_allowed: None,
        }
    }

    fn setup(msg: InstantiateMsg) -> MockStorage {
        let mut storage = MockStorage::new();
        instantiate(&mut storage, &ctx_at(ADMIN, 1, 0), msg).unwrap();
        storage
    }

    fn signer() -> VanitySigner {
        VanitySigner::new(CHAIN_ID, &Addr::unchecked(REGISTRY)).unwrap()
    }

    fn record(name: &str, owner: &str, salt: u128) -> VanityRecord {
        VanityRecord::new(name, owner, 30, Uint128::new(salt)).unwrap()
    }

    fn commit_record(
        storage: &mut MockStorage,
        record: &VanityRecord,
        height: u64,
        sequence: u64,
    ) -> Response {
        let commitment = signer().commitment(record).unwrap();
        execute(
            storage,
            &ctx_at(record.owner.as_str(), height, sequence),
            ExecuteMsg::Commit { commitment },
        )
        .unwrap()
    }

    fn register_record(
        storage: &mut MockStorage,
        record: &VanityRecord,
        key: &SigningKey,
        ctx: &CallContext,
    ) -> Result<Response, ContractError> {
        let payload = signer().registration_payload(record, key).unwrap();
        execute(storage, ctx, ExecuteMsg::Register { payload })
    }

    fn outcome_of(response: &Response) -> RegistrationOutcome {
        let data = response.data.as_ref().unwrap();
        from_binary::<RegisterResponse>(data).unwrap().outcome
    }

    fn ownership(storage: &MockStorage, name: &str) -> DomainOwnershipResponse {
        let res = query(
            storage,
            QueryMsg::DomainOwnership {
                name: String::from(name),
            },
        )
        .unwrap();
        from_binary(&res).unwrap()
    }

    fn wasm_execute(msg: &CosmosMsg) -> (String, Cw20ExecuteMsg) {
        match msg {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr, msg, ..
            }) => (contract_addr.clone(), from_binary(msg).unwrap()),
            other => panic!("unexpected message {:?}", other),
        }
    }

    /// alice commits "ABAG" at height 10 and registers it at height 12.
    fn registered_abag() -> MockStorage {
        let mut storage = setup(default_instantiate_msg());
        let record = record("ABAG", ALICE, 1212);
        commit_record(&mut storage, &record, 10, 1);
        register_record(&mut storage, &record, &alice_key(), &ctx_at(ALICE, 12, 2)).unwrap();
        storage
    }

    #[test]
    fn proper_initialization() {
        let storage = setup(default_instantiate_msg());
        let res = query(&storage, QueryMsg::Config {}).unwrap();
        let config: ConfigResponse = from_binary(&res).unwrap();
        assert_eq!(
            config,
            ConfigResponse {
                admin: Addr::unchecked(ADMIN),
                accepted_token: Some(Addr::unchecked(TOKEN)),
                fee_pool: None,
                max_allowed_gas_price: Uint128::new(100 * GWEI),
                commit_grace_blocks: 20,
                activation_grace_blocks: 100,
                cost_per_character: Uint128::new(2 * TOKEN_UNIT),
                fee_ratio: 100,
                max_expiration_allowed: 31_536_000,
                chain_id: CHAIN_ID,
                verifying_contract: Addr::unchecked(REGISTRY),
            }
        );
    }

    #[test]
    fn instantiate_rejects_bad_fee_ratio() {
        let mut storage = MockStorage::new();
        let mut msg = default_instantiate_msg();
        msg.fee_ratio = Some(10_001);
        let err = instantiate(&mut storage, &ctx_at(ADMIN, 1, 0), msg).unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidFeeRatio {
                fee_ratio: 10_001,
                max: 10_000
            }
        );
    }

    #[test]
    fn test_domain_separator() {
        let storage = setup(default_instantiate_msg());
        let res = query(&storage, QueryMsg::DomainSeparator {}).unwrap();
        let response: DomainSeparatorResponse = from_binary(&res).unwrap();
        assert_eq!(
            response.domain_separator,
            "530c5f9a82a1582694a30f77e70717e8592bff518c832892fc377173bec3c734"
        );
    }

    #[test]
    fn test_record_hash_matches_signer() {
        let storage = setup(default_instantiate_msg());
        let record = record("ABAG", ALICE, 1212);
        let res = query(
            &storage,
            QueryMsg::RecordHash {
                record: record.clone(),
            },
        )
        .unwrap();
        let response: RecordHashResponse = from_binary(&res).unwrap();
        assert_eq!(
            response.hash,
            "6b50a0966cab4312e05393d1af5f800c506e1f957f68600fca1040a658bc0ee6"
        );
        assert_eq!(response.hash, signer().commitment(&record).unwrap());
    }

    // Commit
    #[test]
    fn test_commit() {
        let mut storage = setup(default_instantiate_msg());
        let commitment =
            String::from("0x6B50A0966CAB4312E05393D1AF5F800C506E1F957F68600FCA1040A658BC0EE6");
        let res = execute(
            &mut storage,
            &ctx_at(ALICE, 10, 4),
            ExecuteMsg::Commit {
                commitment: commitment.clone(),
            },
        )
        .unwrap();

        let normalized = "6b50a0966cab4312e05393d1af5f800c506e1f957f68600fca1040a658bc0ee6";
        assert_eq!(res.attributes[1].value, normalized);
        assert_eq!(res.events.len(), 1);
        assert_eq!(res.events[0].ty, EVENT_HASH_COMMITTED);
        assert_eq!(res.events[0].attributes[0].value, normalized);

        let res = query(&storage, QueryMsg::Commitment { hash: commitment }).unwrap();
        let entry: CommitmentResponse = from_binary(&res).unwrap();
        assert_eq!(
            entry,
            CommitmentResponse {
                hash: String::from(normalized),
                committer_height: 10,
                sequence: 4,
            }
        );
    }

    #[test]
    fn test_entry_points_number_calls() {
        let mut deps = mock_dependencies(&[]);
        let mut env = mock_env();
        env.contract.address = Addr::unchecked(REGISTRY);
        entry::instantiate(
            deps.as_mut(),
            env.clone(),
            mock_info(ADMIN, &[]),
            default_instantiate_msg(),
        )
        .unwrap();

        let first = "11".repeat(32);
        let second = "22".repeat(32);
        for hash in [first.clone(), second.clone()].iter() {
            entry::execute(
                deps.as_mut(),
                env.clone(),
                mock_info(ALICE, &[]),
                ExecuteMsg::Commit {
                    commitment: hash.clone(),
                },
            )
            .unwrap();
        }

        let commitment = |hash: &str| -> CommitmentResponse {
            let res = entry::query(
                deps.as_ref(),
                env.clone(),
                QueryMsg::Commitment {
                    hash: hash.to_string(),
                },
            )
            .unwrap();
            from_binary(&res).unwrap()
        };
        assert_eq!(commitment(&first).sequence, 1);
        assert_eq!(commitment(&second).sequence, 2);
        assert_eq!(commitment(&second).committer_height, env.block.height);

        let res = entry::query(deps.as_ref(), env.clone(), QueryMsg::Admin {}).unwrap();
        let admin: AdminResponse = from_binary(&res).unwrap();
        assert_eq!(admin.admin, Addr::unchecked(ADMIN));
    }

    #[test]
    fn test_commit_duplicate() {
        let mut storage = setup(default_instantiate_msg());
        let record = record("ABAG", ALICE, 1212);
        commit_record(&mut storage, &record, 10, 1);

        let err = execute(
            &mut storage,
            &ctx_at(BOB, 11, 2),
            ExecuteMsg::Commit {
                commitment: signer().commitment(&record).unwrap(),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::HashAlreadyCommitted {
                hash: signer().commitment(&record).unwrap(),
                committed_at: 10,
            }
        );
    }

    #[test]
    fn test_commit_invalid_hash() {
        let mut storage = setup(default_instantiate_msg());
        for commitment in &["", "0x1234", "not a hash at all"] {
            let err = execute(
                &mut storage,
                &ctx_at(ALICE, 10, 1),
                ExecuteMsg::Commit {
                    commitment: commitment.to_string(),
                },
            )
            .unwrap_err();
            assert_eq!(
                err,
                ContractError::InvalidHashFormat {
                    hash: commitment.to_string()
                }
            );
        }
    }

    // Register
    #[test]
    fn test_register_installs() {
        let mut storage = setup(default_instantiate_msg());
        let record = record("ABAG", ALICE, 1212);
        commit_record(&mut storage, &record, 10, 1);

        let res =
            register_record(&mut storage, &record, &alice_key(), &ctx_at(ALICE, 30, 2)).unwrap();
        assert_eq!(outcome_of(&res), RegistrationOutcome::Installed);
        assert_eq!(res.events.len(), 1);
        assert_eq!(res.events[0].ty, EVENT_REGISTERED);
        assert_eq!(res.events[0].attributes[0].value, "ABAG");
        assert_eq!(res.events[0].attributes[1].value, ALICE);
        assert_eq!(res.events[0].attributes[2].value, "10");

        let owned = ownership(&storage, "ABAG");
        assert_eq!(owned.owner, Some(Addr::unchecked(ALICE)));
        assert_eq!(owned.committer_height, 10);
        assert_eq!(owned.expiration, 30);
        assert!(!owned.activated);
        assert_eq!(owned.staked_amount, Uint128::zero());
    }

    #[test]
    fn test_register_commit_expired() {
        let mut storage = setup(default_instantiate_msg());
        let record = record("ABAG", ALICE, 1212);
        commit_record(&mut storage, &record, 10, 1);

        let err = register_record(&mut storage, &record, &alice_key(), &ctx_at(ALICE, 31, 2))
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::CommitExpired {
                committed_at: 10,
                expired_at: 30,
                current: 31,
            }
        );
        assert_eq!(ownership(&storage, "ABAG").owner, None);
    }

    #[test]
    fn test_register_without_commit() {
        let mut storage = setup(default_instantiate_msg());
        let record = record("ABAG", ALICE, 1212);
        let err = register_record(&mut storage, &record, &alice_key(), &ctx_at(ALICE, 10, 1))
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::CommitmentNotFound {
                hash: signer().commitment(&record).unwrap()
            }
        );
    }

    #[test]
    fn test_register_signed_by_other_key() {
        let mut storage = setup(default_instantiate_msg());
        let record = record("ABAG", ALICE, 1212);
        commit_record(&mut storage, &record, 10, 1);

        let err = register_record(&mut storage, &record, &bob_key(), &ctx_at(ALICE, 11, 2))
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::SignerMismatch {
                signer: String::from(BOB),
                owner: String::from(ALICE),
            }
        );
    }

    #[test]
    fn test_register_unrecoverable_signature() {
        let mut storage = setup(default_instantiate_msg());
        let record = record("ABAG", ALICE, 1212);
        commit_record(&mut storage, &record, 10, 1);

        let mut bytes = signer()
            .registration_payload(&record, &alice_key())
            .unwrap()
            .to_vec();
        for byte in bytes[128..192].iter_mut() {
            *byte = 0;
        }
        let err = execute(
            &mut storage,
            &ctx_at(ALICE, 11, 2),
            ExecuteMsg::Register {
                payload: Binary::from(bytes),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::SignatureMismatch {});
    }

    #[test]
    fn test_register_by_other_caller() {
        let mut storage = setup(default_instantiate_msg());
        let record = record("ABAG", ALICE, 1212);
        commit_record(&mut storage, &record, 10, 1);

        let err = register_record(&mut storage, &record, &alice_key(), &ctx_at(BOB, 11, 2))
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::CallerNotOwner {
                caller: String::from(BOB),
                owner: String::from(ALICE),
            }
        );
    }

    #[test]
    fn test_register_gas_price_cap() {
        let mut storage = setup(default_instantiate_msg());
        let record = record("ABAG", ALICE, 1212);
        commit_record(&mut storage, &record, 10, 1);

        let mut ctx = ctx_at(ALICE, 11, 2);
        ctx.gas_price = Uint128::new(100 * GWEI + 1);
        let err = register_record(&mut storage, &record, &alice_key(), &ctx).unwrap_err();
        assert_eq!(
            err,
            ContractError::GasPriceExceeded {
                gas_price: Uint128::new(100 * GWEI + 1),
                max_allowed: Uint128::new(100 * GWEI),
            }
        );

        ctx.gas_price = Uint128::new(100 * GWEI);
        register_record(&mut storage, &record, &alice_key(), &ctx).unwrap();
    }

    #[test]
    fn test_register_expiration_too_long() {
        let mut storage = setup(default_instantiate_msg());
        let record = VanityRecord::new("ABAG", ALICE, 31_536_001, Uint128::new(1)).unwrap();
        commit_record(&mut storage, &record, 10, 1);

        let err = register_record(&mut storage, &record, &alice_key(), &ctx_at(ALICE, 11, 2))
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::ExpirationTooLong {
                expiration: 31_536_001,
                max_allowed: 31_536_000,
            }
        );
    }

    #[test]
    fn test_register_malformed_payload() {
        let mut storage = setup(default_instantiate_msg());
        let err = execute(
            &mut storage,
            &ctx_at(ALICE, 11, 2),
            ExecuteMsg::Register {
                payload: Binary::from(vec![0u8; 200]),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::Vanity(VanityError::InvalidPayloadLength {
                expected: 224,
                actual: 200
            })
        );
    }

    #[test]
    fn test_later_commit_is_rejected() {
        let mut storage = registered_abag();
        let bob_record = record("ABAG", BOB, 99);
        commit_record(&mut storage, &bob_record, 13, 3);

        let res = register_record(&mut storage, &bob_record, &bob_key(), &ctx_at(BOB, 14, 4))
            .unwrap();
        assert_eq!(outcome_of(&res), RegistrationOutcome::Rejected);
        assert!(res.events.is_empty());
        assert_eq!(ownership(&storage, "ABAG").owner, Some(Addr::unchecked(ALICE)));
    }

    #[test]
    fn test_earlier_commit_overwrites() {
        let mut storage = setup(default_instantiate_msg());
        let alice_record = record("ABAG", ALICE, 1212);
        let bob_record = record("ABAG", BOB, 99);
        commit_record(&mut storage, &alice_record, 10, 1);
        commit_record(&mut storage, &bob_record, 11, 2);

        // bob reveals first
        let res = register_record(&mut storage, &bob_record, &bob_key(), &ctx_at(BOB, 12, 3))
            .unwrap();
        assert_eq!(outcome_of(&res), RegistrationOutcome::Installed);

        let res =
            register_record(&mut storage, &alice_record, &alice_key(), &ctx_at(ALICE, 13, 4))
                .unwrap();
        assert_eq!(outcome_of(&res), RegistrationOutcome::Overwritten);
        assert_eq!(res.events[0].ty, EVENT_REGISTERED);

        let owned = ownership(&storage, "ABAG");
        assert_eq!(owned.owner, Some(Addr::unchecked(ALICE)));
        assert_eq!(owned.committer_height, 10);

        let res = register_record(&mut storage, &bob_record, &bob_key(), &ctx_at(BOB, 14, 5))
            .unwrap();
        assert_eq!(outcome_of(&res), RegistrationOutcome::Rejected);
        assert_eq!(ownership(&storage, "ABAG").owner, Some(Addr::unchecked(ALICE)));
    }

    #[test]
    fn test_same_height_commits_ordered_by_sequence() {
        let mut storage = setup(default_instantiate_msg());
        let alice_record = record("ABAG", ALICE, 1212);
        let bob_record = record("ABAG", BOB, 99);
        commit_record(&mut storage, &alice_record, 10, 7);
        commit_record(&mut storage, &bob_record, 10, 8);

        register_record(&mut storage, &bob_record, &bob_key(), &ctx_at(BOB, 11, 9)).unwrap();
        let res =
            register_record(&mut storage, &alice_record, &alice_key(), &ctx_at(ALICE, 11, 10))
                .unwrap();
        assert_eq!(outcome_of(&res), RegistrationOutcome::Overwritten);
        assert_eq!(ownership(&storage, "ABAG").commit_sequence, 7);
    }

    #[test]
    fn test_stale_record_can_be_replaced() {
        let mut storage = registered_abag();
        let bob_record = record("ABAG", BOB, 99);

        // alice's commit grace window closes at 10 + 20
        commit_record(&mut storage, &bob_record, 30, 3);
        let res = register_record(&mut storage, &bob_record, &bob_key(), &ctx_at(BOB, 30, 4))
            .unwrap();
        assert_eq!(outcome_of(&res), RegistrationOutcome::Rejected);

        let bob_record = record("ABAG", BOB, 100);
        commit_record(&mut storage, &bob_record, 31, 5);
        let res = register_record(&mut storage, &bob_record, &bob_key(), &ctx_at(BOB, 31, 6))
            .unwrap();
        assert_eq!(outcome_of(&res), RegistrationOutcome::Installed);
        assert_eq!(ownership(&storage, "ABAG").owner, Some(Addr::unchecked(BOB)));
        assert_eq!(ownership(&storage, "ABAG").committer_height, 31);

        let err = execute(
            &mut storage,
            &ctx_at(ALICE, 32, 7),
            ExecuteMsg::Activate {
                name: String::from("ABAG"),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::NotDomainOwner {
                name: String::from("ABAG"),
                sender: String::from(ALICE),
            }
        );
    }

    #[test]
    fn test_lapsed_record_can_still_activate() {
        let mut storage = registered_abag();
        execute(
            &mut storage,
            &ctx_at(ALICE, 60, 3),
            ExecuteMsg::Activate {
                name: String::from("ABAG"),
            },
        )
        .unwrap();

        let bob_record = record("ABAG", BOB, 99);
        commit_record(&mut storage, &bob_record, 61, 4);
        let res = register_record(&mut storage, &bob_record, &bob_key(), &ctx_at(BOB, 61, 5))
            .unwrap();
        assert_eq!(outcome_of(&res), RegistrationOutcome::Rejected);
        assert!(ownership(&storage, "ABAG").activated);
    }

    // Activate
    #[test]
    fn test_activate_without_fee_pool() {
        let mut storage = registered_abag();
        let res = execute(
            &mut storage,
            &ctx_at(ALICE, 31, 3),
            ExecuteMsg::Activate {
                name: String::from("ABAG"),
            },
        )
        .unwrap();

        assert_eq!(res.messages.len(), 1);
        let (contract, msg) = wasm_execute(&res.messages[0].msg);
        assert_eq!(contract, TOKEN);
        assert_eq!(
            msg,
            Cw20ExecuteMsg::TransferFrom {
                owner: String::from(ALICE),
                recipient: String::from(REGISTRY),
                amount: Uint128::new(8 * TOKEN_UNIT),
            }
        );
        assert_eq!(res.events[0].ty, EVENT_ACTIVATED);
        assert_eq!(res.events[0].attributes[2].value, (8 * TOKEN_UNIT).to_string());

        let owned = ownership(&storage, "ABAG");
        assert!(owned.activated);
        assert_eq!(owned.activated_at, Some(GENESIS_TIME + 31));
        assert_eq!(owned.staked_amount, Uint128::new(7_920_000_000_000_000_000));
    }

    #[test]
    fn test_activate_with_fee_pool() {
        let mut storage = registered_abag();
        execute(
            &mut storage,
            &ctx_at(ADMIN, 20, 3),
            ExecuteMsg::SetFeePool {
                fee_pool: Some(String::from(FEE_POOL)),
            },
        )
        .unwrap();

        let res = execute(
            &mut storage,
            &ctx_at(ALICE, 31, 4),
            ExecuteMsg::Activate {
                name: String::from("ABAG"),
            },
        )
        .unwrap();
        assert_eq!(res.messages.len(), 2);
        let (_, msg) = wasm_execute(&res.messages[1].msg);
        assert_eq!(
            msg,
            Cw20ExecuteMsg::Transfer {
                recipient: String::from(FEE_POOL),
                amount: Uint128::new(80_000_000_000_000_000),
            }
        );
    }

    #[test]
    fn test_activate_window() {
        let mut storage = registered_abag();
        let activate = ExecuteMsg::Activate {
            name: String::from("ABAG"),
        };

        let err = execute(&mut storage, &ctx_at(ALICE, 30, 3), activate.clone()).unwrap_err();
        assert_eq!(
            err,
            ContractError::ActivationTooEarly {
                opens_after: 30,
                current: 30
            }
        );

        let err = execute(&mut storage, &ctx_at(ALICE, 131, 4), activate.clone()).unwrap_err();
        assert_eq!(
            err,
            ContractError::ActivationWindowClosed {
                closed_at: 130,
                current: 131
            }
        );

        execute(&mut storage, &ctx_at(ALICE, 130, 5), activate.clone()).unwrap();
        let err = execute(&mut storage, &ctx_at(ALICE, 130, 6), activate).unwrap_err();
        assert_eq!(
            err,
            ContractError::AlreadyActivated {
                name: String::from("ABAG")
            }
        );
    }

    #[test]
    fn test_activate_not_owner() {
        let mut storage = registered_abag();
        for name in &["ABAG", "ZZZZ"] {
            let err = execute(
                &mut storage,
                &ctx_at(BOB, 31, 3),
                ExecuteMsg::Activate {
                    name: name.to_string(),
                },
            )
            .unwrap_err();
            assert_eq!(
                err,
                ContractError::NotDomainOwner {
                    name: name.to_string(),
                    sender: String::from(BOB),
                }
            );
        }
    }

    #[test]
    fn test_activate_without_token() {
        let mut msg = default_instantiate_msg();
        msg.accepted_token = None;
        let mut storage = setup(msg);
        let record = record("ABAG", ALICE, 1212);
        commit_record(&mut storage, &record, 10, 1);
        register_record(&mut storage, &record, &alice_key(), &ctx_at(ALICE, 12, 2)).unwrap();

        let err = execute(
            &mut storage,
            &ctx_at(ALICE, 31, 3),
            ExecuteMsg::Activate {
                name: String::from("ABAG"),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::TokenNotConfigured {});
    }

    #[test]
    fn test_activated_record_is_never_overwritten() {
        let mut storage = registered_abag();
        execute(
            &mut storage,
            &ctx_at(ALICE, 31, 3),
            ExecuteMsg::Activate {
                name: String::from("ABAG"),
            },
        )
        .unwrap();

        // long after the activation window
        let bob_record = record("ABAG", BOB, 99);
        commit_record(&mut storage, &bob_record, 500, 4);
        let res = register_record(&mut storage, &bob_record, &bob_key(), &ctx_at(BOB, 501, 5))
            .unwrap();
        assert_eq!(outcome_of(&res), RegistrationOutcome::Rejected);
        assert_eq!(ownership(&storage, "ABAG").owner, Some(Addr::unchecked(ALICE)));
    }

    // Claim
    #[test]
    fn test_claim() {
        let mut storage = registered_abag();
        let claim = ExecuteMsg::Claim {
            name: String::from("ABAG"),
        };

        let err = execute(&mut storage, &ctx_at(ALICE, 31, 3), claim.clone()).unwrap_err();
        assert_eq!(
            err,
            ContractError::NotActivated {
                name: String::from("ABAG")
            }
        );

        execute(
            &mut storage,
            &ctx_at(ALICE, 31, 4),
            ExecuteMsg::Activate {
                name: String::from("ABAG"),
            },
        )
        .unwrap();

        // activated at GENESIS_TIME + 31 with a 30 second expiration
        let err = execute(&mut storage, &ctx_at(ALICE, 60, 5), claim.clone()).unwrap_err();
        assert_eq!(
            err,
            ContractError::RecordNotExpired {
                expires_at: GENESIS_TIME + 61,
                current: GENESIS_TIME + 60,
            }
        );

        let err = execute(&mut storage, &ctx_at(BOB, 61, 6), claim.clone()).unwrap_err();
        assert_eq!(
            err,
            ContractError::NotDomainOwner {
                name: String::from("ABAG"),
                sender: String::from(BOB),
            }
        );

        let res = execute(&mut storage, &ctx_at(ALICE, 61, 7), claim).unwrap();
        let (contract, msg) = wasm_execute(&res.messages[0].msg);
        assert_eq!(contract, TOKEN);
        assert_eq!(
            msg,
            Cw20ExecuteMsg::Transfer {
                recipient: String::from(ALICE),
                amount: Uint128::new(7_920_000_000_000_000_000),
            }
        );
        assert_eq!(res.events[0].ty, EVENT_CLAIMED);
        assert_eq!(ownership(&storage, "ABAG").owner, None);
    }

    // Admin
    #[test]
    fn test_admin_setters() {
        let mut storage = setup(default_instantiate_msg());
        let admin = ctx_at(ADMIN, 2, 1);

        execute(
            &mut storage,
            &admin,
            ExecuteMsg::SetFeeRatio { fee_ratio: 250 },
        )
        .unwrap();
        execute(
            &mut storage,
            &admin,
            ExecuteMsg::SetActivationGraceBlocks { blocks: 7 },
        )
        .unwrap();
        execute(
            &mut storage,
            &admin,
            ExecuteMsg::SetCostPerCharacter {
                cost: Uint128::new(10),
            },
        )
        .unwrap();

        let res = query(&storage, QueryMsg::FeeRatio {}).unwrap();
        assert_eq!(
            from_binary::<FeeRatioResponse>(&res).unwrap().fee_ratio,
            250
        );
        let res = query(&storage, QueryMsg::ActivationGraceBlocks {}).unwrap();
        assert_eq!(from_binary::<GraceBlocksResponse>(&res).unwrap().blocks, 7);
        let res = query(
            &storage,
            QueryMsg::ActivationCost {
                name: String::from("ABAG"),
            },
        )
        .unwrap();
        assert_eq!(
            from_binary::<ActivationCostResponse>(&res).unwrap(),
            ActivationCostResponse {
                cost: Uint128::new(40),
                fee: Uint128::new(1),
                staked: Uint128::new(39),
            }
        );

        let err = execute(
            &mut storage,
            &admin,
            ExecuteMsg::SetFeeRatio { fee_ratio: 10_001 },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidFeeRatio {
                fee_ratio: 10_001,
                max: 10_000
            }
        );

        execute(
            &mut storage,
            &admin,
            ExecuteMsg::SetAdmin {
                admin: String::from(BOB),
            },
        )
        .unwrap();
        let err = execute(
            &mut storage,
            &admin,
            ExecuteMsg::SetCommitGraceBlocks { blocks: 1 },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::Unauthorized {
                sender: String::from(ADMIN),
                admin: String::from(BOB),
            }
        );
    }

    #[test]
    fn test_setters_only_admin() {
        let mut storage = setup(default_instantiate_msg());
        let msgs = vec![
            ExecuteMsg::SetAdmin {
                admin: String::from(ALICE),
            },
            ExecuteMsg::SetAcceptedToken {
                token: String::from(TOKEN),
            },
            ExecuteMsg::SetFeePool { fee_pool: None },
            ExecuteMsg::SetMaxAllowedGasPrice {
                gas_price: Uint128::new(1),
            },
            ExecuteMsg::SetCommitGraceBlocks { blocks: 1 },
            ExecuteMsg::SetActivationGraceBlocks { blocks: 1 },
            ExecuteMsg::SetCostPerCharacter {
                cost: Uint128::new(1),
            },
            ExecuteMsg::SetFeeRatio { fee_ratio: 1 },
            ExecuteMsg::SetMaxExpirationAllowed { seconds: 1 },
        ];
        for msg in msgs {
            let err = execute(&mut storage, &ctx_at(ALICE, 2, 1), msg).unwrap_err();
            assert_eq!(
                err,
                ContractError::Unauthorized {
                    sender: String::from(ALICE),
                    admin: String::from(ADMIN),
                }
            );
        }
    }

    #[test]
    fn test_commit_entry_precedes() {
        let entry = CommitEntry {
            hash: String::new(),
            committer_height: 10,
            sequence: 5,
        };
        assert!(entry.precedes(11, 0));
        assert!(entry.precedes(10, 6));
        assert!(!entry.precedes(10, 5));
        assert!(!entry.precedes(9, 100));
    }

    #[test]
    fn test_message_roundtrip_through_json() {
        let payload = signer()
            .registration_payload(&record("ABAG", ALICE, 1212), &alice_key())
            .unwrap();
        let msg = ExecuteMsg::Register { payload };
        assert_eq!(from_binary::<ExecuteMsg>(&to_binary(&msg).unwrap()).unwrap(), msg);
    }

    fn fee_config(cost_per_character: u128, fee_ratio: u64) -> Config {
        Config {
            admin: Addr::unchecked(ADMIN),
            accepted_token: None,
            fee_pool: None,
            max_allowed_gas_price: Uint128::zero(),
            commit_grace_blocks: 20,
            activation_grace_blocks: 100,
            cost_per_character: Uint128::new(cost_per_character),
            fee_ratio,
            max_expiration_allowed: 0,
            chain_id: CHAIN_ID,
            verifying_contract: Addr::unchecked(REGISTRY),
        }
    }

    proptest! {
        #[test]
        fn fee_and_stake_add_up_to_cost(
            cost_per_character in 0u128..=u128::MAX / 64,
            fee_ratio in 0u64..=10_000,
            len in 1usize..=32,
        ) {
            let name = "a".repeat(len);
            let config = fee_config(cost_per_character, fee_ratio);
            let (cost, fee) = activation_cost(&config, &name).unwrap();
            let staked = cost.checked_sub(fee).unwrap();
            prop_assert_eq!(cost.u128(), cost_per_character * len as u128);
            prop_assert_eq!(fee + staked, cost);
            prop_assert_eq!(fee.u128(), floor_mul_div(cost.u128(), fee_ratio as u128, 10_000));
        }
    }

    /// floor(a * b / c) without overflowing for b <= c.
    fn floor_mul_div(a: u128, b: u128, c: u128) -> u128 {
        (a / c) * b + (a % c) * b / c
    }
}
