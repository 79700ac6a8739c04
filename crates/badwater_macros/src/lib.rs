use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, Pat};

/// Time a system when the `perf_stats` feature is enabled.
///
/// The function body is wrapped in a drop guard that reports the elapsed time
/// through Bevy's `info!` once the system returns. Without `perf_stats` the
/// guard is never constructed.
///
/// If the function takes a `tick: Res<FlowTick>` parameter, the guard also
/// reports every 100th flow tick regardless of duration.
///
/// ```ignore
/// #[profile]
/// pub fn run_flow_pass(mut grid: ResMut<TileGrid>, tick: Res<FlowTick>) {
///     // ...
/// }
///
/// #[profile(2)] // report only above 2ms
/// pub fn sync_tile_sprites() { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn profile(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    let threshold_ms: u128 = if attr.is_empty() {
        1
    } else {
        attr.to_string().parse().unwrap_or(1)
    };

    let attrs = &input.attrs;
    let vis = &input.vis;
    let sig = &input.sig;
    let block = &input.block;
    let fn_name_str = sig.ident.to_string();

    let has_tick_param = sig.inputs.iter().any(|arg| {
        let FnArg::Typed(pat_type) = arg else { return false };
        let Pat::Ident(pat_ident) = &*pat_type.pat else { return false };
        if pat_ident.ident != "tick" {
            return false;
        }
        let ty = &pat_type.ty;
        quote!(#ty).to_string().contains("FlowTick")
    });

    let tick_field = if has_tick_param {
        quote! { Some(tick.0) }
    } else {
        quote! { None }
    };

    let output = quote! {
        #(#attrs)*
        #vis #sig {
            #[cfg(feature = "perf_stats")]
            let _profile_timer = {
                struct ProfileGuard {
                    name: &'static str,
                    start: std::time::Instant,
                    tick: Option<u64>,
                }
                impl Drop for ProfileGuard {
                    fn drop(&mut self) {
                        let elapsed = self.start.elapsed();
                        let on_interval = self.tick.is_some_and(|t| t % 100 == 0);
                        if elapsed.as_millis() > #threshold_ms || on_interval {
                            bevy::prelude::info!("[PERF] {}: {:?}", self.name, elapsed);
                        }
                    }
                }
                ProfileGuard {
                    name: #fn_name_str,
                    start: std::time::Instant::now(),
                    tick: #tick_field,
                }
            };

            #block
        }
    };

    output.into()
}
