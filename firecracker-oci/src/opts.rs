// Copyright (c) Microsoft. All rights reserved.

use std::sync::Arc;

use log::{debug, trace, Level};

use oci_runtime::v1::Spec;

use crate::container::Container;
use crate::error::{Error, Result};
use crate::logging::log_failure;

/// A deferred edit of a runtime spec, run while the spec is being generated
/// for a container.
///
/// `Ctx` and `Cl` are whatever request context and client handle the calling
/// pipeline threads through. Options that don't need them stay generic over
/// both.
///
/// Boxed, borrowed and `Arc`-shared options are options too. Wrap a closure
/// with [`spec_opt`] to put an ad-hoc edit next to the named options.
pub trait SpecOpts<Ctx: ?Sized, Cl: ?Sized> {
    fn apply(&self, ctx: &Ctx, client: &Cl, container: &Container, spec: &mut Spec) -> Result<()>;
}

impl<Ctx, Cl, T> SpecOpts<Ctx, Cl> for Box<T>
where
    Ctx: ?Sized,
    Cl: ?Sized,
    T: SpecOpts<Ctx, Cl> + ?Sized,
{
    fn apply(&self, ctx: &Ctx, client: &Cl, container: &Container, spec: &mut Spec) -> Result<()> {
        (**self).apply(ctx, client, container, spec)
    }
}

impl<Ctx, Cl, T> SpecOpts<Ctx, Cl> for &T
where
    Ctx: ?Sized,
    Cl: ?Sized,
    T: SpecOpts<Ctx, Cl> + ?Sized,
{
    fn apply(&self, ctx: &Ctx, client: &Cl, container: &Container, spec: &mut Spec) -> Result<()> {
        (**self).apply(ctx, client, container, spec)
    }
}

impl<Ctx, Cl, T> SpecOpts<Ctx, Cl> for Arc<T>
where
    Ctx: ?Sized,
    Cl: ?Sized,
    T: SpecOpts<Ctx, Cl> + ?Sized,
{
    fn apply(&self, ctx: &Ctx, client: &Cl, container: &Container, spec: &mut Spec) -> Result<()> {
        (**self).apply(ctx, client, container, spec)
    }
}

/// Spec option returned by [`spec_opt`].
#[derive(Clone, Copy)]
pub struct FnOpt<F>(F);

/// Turns a closure into a spec option.
pub fn spec_opt<Ctx, Cl, F>(f: F) -> FnOpt<F>
where
    Ctx: ?Sized,
    Cl: ?Sized,
    F: Fn(&Ctx, &Cl, &Container, &mut Spec) -> Result<()>,
{
    FnOpt(f)
}

impl<Ctx, Cl, F> SpecOpts<Ctx, Cl> for FnOpt<F>
where
    Ctx: ?Sized,
    Cl: ?Sized,
    F: Fn(&Ctx, &Cl, &Container, &mut Spec) -> Result<()>,
{
    fn apply(&self, ctx: &Ctx, client: &Cl, container: &Container, spec: &mut Spec) -> Result<()> {
        (self.0)(ctx, client, container, spec)
    }
}

/// Runs `opts` against `spec` in order.
///
/// Stops at the first option that fails. The returned error records the
/// option's position in `opts` and the container it was applied for.
pub fn apply_opts<Ctx, Cl>(
    ctx: &Ctx,
    client: &Cl,
    container: &Container,
    spec: &mut Spec,
    opts: &[Box<dyn SpecOpts<Ctx, Cl> + '_>],
) -> Result<()>
where
    Ctx: ?Sized,
    Cl: ?Sized,
{
    for (index, opt) in opts.iter().enumerate() {
        trace!(
            "Applying spec option {} to container {:?}",
            index,
            container.id()
        );

        if let Err(err) = opt.apply(ctx, client, container, spec) {
            let err = Error::ApplyOpt {
                index,
                container_id: container.id().to_string(),
                source: Box::new(err),
            };
            log_failure(Level::Warn, &err);
            return Err(err);
        }
    }

    Ok(())
}

/// Builds a fresh runtime spec for `container` and runs `opts` against it.
pub fn generate_spec<Ctx, Cl>(
    ctx: &Ctx,
    client: &Cl,
    container: &Container,
    opts: &[Box<dyn SpecOpts<Ctx, Cl> + '_>],
) -> Result<Spec>
where
    Ctx: ?Sized,
    Cl: ?Sized,
{
    debug!(
        "Generating runtime spec for container {:?} with {} option(s)",
        container.id(),
        opts.len()
    );

    let mut spec = Spec::new();
    apply_opts(ctx, client, container, &mut spec, opts)?;
    Ok(spec)
}
