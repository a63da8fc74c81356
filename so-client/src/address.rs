/// Owner of the protocol fee accounts.
pub mod fee_treasury {
    use anchor_lang::declare_id;
    declare_id!("7Z36Efbt7a4nLiV7s5bY7J2e4TJ6V9JEKGccsy2od2bE");
}

pub mod token_metadata_program {
    use anchor_lang::declare_id;
    declare_id!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");
}
