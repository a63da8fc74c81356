extern crate proc_macro;

use anchor_syn::codegen::program::common::{sighash, SIGHASH_GLOBAL_NAMESPACE};
use heck::{ShoutySnakeCase, SnakeCase};
use quote::{format_ident, quote};
use syn::parse_macro_input;
use syn::spanned::Spanned;

/// Generates off-chain instruction builders for every method of the annotated trait.
///
/// The first parameter of each method names the accounts struct and is replaced by
/// `program_id: &Pubkey, accounts: &T` in the generated builder. The remaining
/// parameters are Borsh-encoded, in declaration order, after the 8-byte Anchor
/// sighash of the method name.
#[proc_macro_attribute]
pub fn instruction_interface(
    _args: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item_trait = parse_macro_input!(input as syn::ItemTrait);

    let mod_name = format_ident!("{}", item_trait.ident.to_string().to_snake_case());

    let methods: Vec<&syn::TraitItemMethod> = item_trait
        .items
        .iter()
        .filter_map(|trait_item: &syn::TraitItem| match trait_item {
            syn::TraitItem::Method(m) => Some(m),
            _ => None,
        })
        .collect();

    let mut builders: Vec<proc_macro2::TokenStream> = Vec::with_capacity(methods.len());
    let mut discriminators: Vec<proc_macro2::TokenStream> = Vec::with_capacity(methods.len());
    let mut table: Vec<proc_macro2::TokenStream> = Vec::with_capacity(methods.len());

    for method in methods {
        let args = match instruction_args(method) {
            Ok(args) => args,
            Err(e) => {
                return syn::Error::new(method.sig.span(), e)
                    .to_compile_error()
                    .into()
            }
        };
        let method_name = &method.sig.ident;
        let ix_name = method_name.to_string();
        let const_name = format_ident!("{}", ix_name.to_shouty_snake_case());
        let args_no_tys: Vec<&syn::Pat> = args.iter().map(|arg| &*arg.pat).collect();
        let args_struct = {
            if args.is_empty() {
                quote! {
                    #[derive(anchor_lang::AnchorSerialize, anchor_lang::AnchorDeserialize)]
                    struct Args;
                }
            } else {
                quote! {
                    #[derive(anchor_lang::AnchorSerialize, anchor_lang::AnchorDeserialize)]
                    struct Args {
                        #(#args),*
                    }
                }
            }
        };

        let sighash_arr = sighash(SIGHASH_GLOBAL_NAMESPACE, &ix_name);
        let sighash_tts: proc_macro2::TokenStream = format!("{:?}", sighash_arr)
            .parse()
            .expect("byte array literal");

        discriminators.push(quote! {
            pub const #const_name: [u8; 8] = #sighash_tts;
        });
        table.push(quote! {
            (#ix_name, #const_name)
        });
        builders.push(quote! {
            pub fn #method_name<T: anchor_lang::ToAccountMetas>(
                program_id: &anchor_lang::prelude::Pubkey,
                accounts: &T,
                #(#args),*
            ) -> anchor_lang::prelude::Result<
                anchor_lang::solana_program::instruction::Instruction,
            > {
                #args_struct

                let ix = Args {
                    #(#args_no_tys),*
                };
                let mut ix_data = anchor_lang::AnchorSerialize::try_to_vec(&ix)
                    .map_err(|_| anchor_lang::error::ErrorCode::InstructionDidNotSerialize)?;
                let mut data = #const_name.to_vec();
                data.append(&mut ix_data);
                Ok(anchor_lang::solana_program::instruction::Instruction {
                    program_id: *program_id,
                    accounts: anchor_lang::ToAccountMetas::to_account_metas(accounts, None),
                    data,
                })
            }
        });
    }

    proc_macro::TokenStream::from(quote! {
        #item_trait

        /// Generated instruction builders for programs implementing an
        /// `#[instruction_interface]`.
        pub mod #mod_name {
            use super::*;

            #(#discriminators)*

            /// Instruction names paired with their discriminators.
            pub const INSTRUCTIONS: &[(&str, [u8; 8])] = &[#(#table),*];

            #(#builders)*
        }
    })
}

/// Every typed parameter after the leading accounts parameter.
fn instruction_args(method: &syn::TraitItemMethod) -> anyhow::Result<Vec<&syn::PatType>> {
    let mut inputs = method.sig.inputs.iter();
    match inputs.next() {
        Some(syn::FnArg::Typed(_)) => {}
        Some(syn::FnArg::Receiver(_)) => anyhow::bail!("Invalid syntax. No self allowed."),
        None => anyhow::bail!(
            "`{}` must take the instruction accounts as its first parameter",
            method.sig.ident
        ),
    }
    inputs
        .map(|arg: &syn::FnArg| match arg {
            syn::FnArg::Typed(pat_ty) => Ok(pat_ty),
            syn::FnArg::Receiver(_) => Err(anyhow::anyhow!("Invalid syntax. No self allowed.")),
        })
        .collect()
}
