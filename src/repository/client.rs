use diesel::prelude::*;

use crate::{
    domain::{
        client::{Client, ClientWithEvents, NewClient, UpdateClient},
        event::{Event, NewEvent},
        types::ClientId,
    },
    models::{
        client::{Client as DbClient, NewClient as DbNewClient, UpdateClient as DbUpdateClient},
        event::{Event as DbEvent, NewEvent as DbNewEvent},
    },
    repository::{
        ClientReader, ClientWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn assemble_client(
    client: DbClient,
    events: Vec<DbEvent>,
) -> Result<ClientWithEvents, RepositoryError> {
    let client = Client::try_from(client)?;
    let events = events
        .into_iter()
        .map(Event::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ClientWithEvents { client, events })
}

fn load_events(
    conn: &mut SqliteConnection,
    client: &DbClient,
) -> Result<Vec<DbEvent>, diesel::result::Error> {
    use crate::schema::events;

    DbEvent::belonging_to(client)
        .select(DbEvent::as_select())
        .order(events::id.asc())
        .load(conn)
}

fn replace_events(
    conn: &mut SqliteConnection,
    client_id: i32,
    new_events: &[NewEvent],
) -> Result<usize, diesel::result::Error> {
    use crate::schema::events;

    diesel::delete(events::table.filter(events::client_id.eq(client_id))).execute(conn)?;

    if new_events.is_empty() {
        return Ok(0);
    }

    let rows = new_events
        .iter()
        .map(|event| DbNewEvent::for_client(client_id, event))
        .collect::<Vec<_>>();

    diesel::insert_into(events::table)
        .values(&rows)
        .execute(conn)
}

impl ClientReader for DieselRepository {
    fn list_clients(&self) -> RepositoryResult<Vec<ClientWithEvents>> {
        use crate::schema::{clients, events};

        let mut conn = self.conn()?;

        let db_clients = clients::table
            .order(clients::id.asc())
            .select(DbClient::as_select())
            .load::<DbClient>(&mut conn)?;

        let db_events = DbEvent::belonging_to(&db_clients)
            .select(DbEvent::as_select())
            .order(events::id.asc())
            .load::<DbEvent>(&mut conn)?
            .grouped_by(&db_clients);

        db_clients
            .into_iter()
            .zip(db_events)
            .map(|(client, events)| assemble_client(client, events))
            .collect()
    }

    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<ClientWithEvents>> {
        use crate::schema::clients;

        let mut conn = self.conn()?;

        let db_client = clients::table
            .find(id.get())
            .select(DbClient::as_select())
            .first::<DbClient>(&mut conn)
            .optional()?;

        match db_client {
            Some(db_client) => {
                let events = load_events(&mut conn, &db_client)?;
                Ok(Some(assemble_client(db_client, events)?))
            }
            None => Ok(None),
        }
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(
        &self,
        new_client: &NewClient,
        events: &[NewEvent],
    ) -> RepositoryResult<ClientWithEvents> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let db_new_client: DbNewClient = new_client.into();

        conn.transaction::<ClientWithEvents, RepositoryError, _>(|conn| {
            let db_client = diesel::insert_into(clients::table)
                .values(&db_new_client)
                .returning(DbClient::as_returning())
                .get_result::<DbClient>(conn)?;

            replace_events(conn, db_client.id, events)?;
            let db_events = load_events(conn, &db_client)?;

            assemble_client(db_client, db_events)
        })
    }

    fn update_client(
        &self,
        id: ClientId,
        updates: &UpdateClient,
        events: &[NewEvent],
    ) -> RepositoryResult<ClientWithEvents> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateClient = updates.into();

        conn.transaction::<ClientWithEvents, RepositoryError, _>(|conn| {
            let db_client = diesel::update(clients::table.find(id.get()))
                .set(&db_updates)
                .returning(DbClient::as_returning())
                .get_result::<DbClient>(conn)?;

            replace_events(conn, db_client.id, events)?;
            let db_events = load_events(conn, &db_client)?;

            assemble_client(db_client, db_events)
        })
    }

    fn delete_client(&self, id: ClientId) -> RepositoryResult<()> {
        use crate::schema::{clients, events};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(events::table.filter(events::client_id.eq(id.get()))).execute(conn)?;

            let deleted = diesel::delete(clients::table.find(id.get())).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }
}
